use std::process::ExitCode;

fn main() -> ExitCode {
    skin_grab_lib::run()
}
