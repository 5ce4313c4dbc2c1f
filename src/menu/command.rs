#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    Play,
    Insert,
    Exit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid option! Try again.")]
    NotANumber(String),
    #[error("Invalid option! Choose from 0 to 3.")]
    UnknownOption(i64),
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, MenuError> {
        let option = line
            .trim()
            .parse::<i64>()
            .map_err(|_| MenuError::NotANumber(line.trim().to_owned()))?;

        match option {
            1 => Ok(Command::Show),
            2 => Ok(Command::Play),
            3 => Ok(Command::Insert),
            0 => Ok(Command::Exit),
            other => Err(MenuError::UnknownOption(other)),
        }
    }
}
