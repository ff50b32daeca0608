mod attribute;
mod parameter;
mod parser;
