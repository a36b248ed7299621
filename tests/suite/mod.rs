mod cli_config;
mod harness;
mod inference;
