use pageforge::command_argument_builder;
use pageforge::handlers::handle_convert;

#[tokio::main]
async fn main() {
    let mut cmd = command_argument_builder();
    let chosen_command = cmd.clone().get_matches();
    let quiet = chosen_command.get_flag("quiet");

    match chosen_command.subcommand() {
        Some(("convert", primary_command)) => handle_convert(primary_command, quiet).await,
        _ => {
            // No subcommand: show usage.
            let _ = cmd.print_help();
        }
    }
}
