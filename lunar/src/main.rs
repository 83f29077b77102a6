use std::process::ExitCode;

use lunar_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    lunar_driver::run(&argument)
}
