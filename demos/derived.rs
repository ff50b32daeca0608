use declarg::derive::*;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Default, DeclargParser)]
#[declarg(program = "derived", about = "Shows the derived parameters.")]
struct Parameters {
    #[declarg(short = 'v', help = "Be chatty.")]
    verbose: bool,
    #[declarg(short = 'k', help = "The secret key, ex: 0x1F.")]
    key: u32,
    #[declarg(no_long, short = 'r')]
    ratios: [f64; 3],
    #[declarg(help = "Tags, until the end or a '--'.")]
    tags: HashSet<String>,
    #[declarg(long = "label")]
    name: Option<String>,
    #[declarg(argument, help = "Where to write.")]
    out_file: PathBuf,
    #[declarg(argument)]
    extra: Option<&'static str>,
}

fn main() {
    let parameters = Parameters::declarg_parse();
    println!("{parameters:#?}");
}
