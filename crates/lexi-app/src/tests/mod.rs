mod cli_tests;
mod command_tests;
