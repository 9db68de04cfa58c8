use std::process::ExitCode;

use monkey_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    monkey_driver::run(argument)
}
