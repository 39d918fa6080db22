mod output_contracts;
mod parse_contracts;
mod support;
