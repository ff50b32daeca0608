use declarg::{Collection, CommandLineParser, Parameter, Switch};

fn main() {
    let mut verbose: bool = false;
    let mut items: Vec<i64> = Vec::default();

    let clp = CommandLineParser::new("summer").about("Sum the items.");
    let parser = clp
        .add(
            Parameter::option(Switch::flag(&mut verbose), "verbose", Some('v'))
                .help("Show each item."),
        )
        .add(
            Parameter::option(Collection::new(&mut items), "sum", Some('s'))
                .help("The items to sum, until the end or a '--'."),
        )
        .build();

    parser.parse();

    if verbose {
        println!("Items: {items:?}");
    }

    let sum: i64 = items.iter().sum();
    println!("Sum: {sum}");
}
