mod common;
mod config;
mod integration_test;
mod menu;
mod queue;

use std::error::Error;
use std::io;

use log::{error, info};

use crate::config::{Config, ConfigError};
use crate::menu::Session;
use crate::queue::PieceQueue;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),
    #[error("Console I/O failed")]
    Io(#[from] io::Error),
}

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    info!("Starting piece queue session, seed {:?}", config.seed);

    let queue = PieceQueue::from_seed(config.seed);
    let stdin = io::stdin();
    let mut session = Session::new(queue, stdin.lock(), io::stdout());
    session.run()?;

    Ok(())
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    run().map_err(|err| {
        error!("{}: {:?}", err, err.source());
        err
    })
}
