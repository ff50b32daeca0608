use declarg::{CommandLineParser, Parameter, Scalar, Switch};

fn main() {
    let mut key: i32 = -1;
    let mut flag: bool = false;
    let mut ratio: f64 = -1.0;

    let parser = CommandLineParser::new("key_flag")
        .add(
            Parameter::option(Scalar::new(&mut key), "key", Some('k'))
                .help("Pass secret key as integer."),
        )
        .add(Parameter::option(Switch::flag(&mut flag), "flag", Some('f')).help("Flag bit."))
        .add(
            Parameter::option(Scalar::new(&mut ratio), "ratio", Some('r'))
                .help("Pass ratio as double."),
        )
        .build();

    parser.parse();

    println!("Flag  is: {flag}");
    println!("Ratio is: {ratio}");
    println!("Secret key is: {key}");
}
