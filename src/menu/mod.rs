pub mod command;

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use log::debug;

use crate::menu::command::Command;
use crate::queue::PieceQueue;

const RULE: &str = "============================";

pub struct Session<R, W>
where
    R: BufRead,
    W: Write,
{
    queue: PieceQueue,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(queue: PieceQueue, input: R, output: W) -> Session<R, W> {
        Session {
            queue,
            input,
            output,
        }
    }

    /// Runs until the exit option is chosen or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        self.write_banner()?;

        loop {
            self.write_menu()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    debug!("Rejected menu input {:?}: {:?}", line.trim(), err);
                    writeln!(self.output, "{}", err)?;
                    writeln!(self.output)?;
                    continue;
                }
            };

            if self.apply(command)?.is_break() {
                break;
            }
            writeln!(self.output)?;
        }

        writeln!(self.output, "Leaving the system. Game over!")?;
        self.output.flush()
    }

    pub fn get_queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn apply(&mut self, command: Command) -> io::Result<ControlFlow<()>> {
        match command {
            Command::Show => {}
            Command::Play => match self.queue.dequeue() {
                Ok(piece) => writeln!(self.output, "Piece played: {}", piece)?,
                Err(err) => writeln!(self.output, "{}", err)?,
            },
            Command::Insert => match self.queue.push_generated() {
                Ok(piece) => writeln!(self.output, "New piece inserted: {}", piece)?,
                Err(err) => writeln!(self.output, "{}", err)?,
            },
            Command::Exit => return Ok(ControlFlow::Break(())),
        }

        render_queue(&mut self.output, &self.queue)?;
        Ok(ControlFlow::Continue(()))
    }

    fn write_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== Circular Queue - Tetris Stack Pieces ===")?;
        writeln!(
            self.output,
            "Queue initialized with {} of {} pieces. Use the menu to interact.",
            self.queue.len(),
            self.queue.capacity()
        )?;
        writeln!(
            self.output,
            "The queue is circular: a played slot is reused by the next insert."
        )?;
        writeln!(self.output)
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1 - Show current queue")?;
        writeln!(self.output, "2 - Play piece (remove from front)")?;
        writeln!(self.output, "3 - Insert new piece (at the rear)")?;
        writeln!(self.output, "0 - Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }
}

pub fn render_queue<W: Write>(output: &mut W, queue: &PieceQueue) -> io::Result<()> {
    if queue.is_empty() {
        return writeln!(output, "Queue is empty!");
    }

    writeln!(output, "=== Current queue state ({} pieces) ===", queue.len())?;
    for (position, piece) in queue.inspect().enumerate() {
        writeln!(output, "Position {}: Piece {}", position + 1, piece)?;
    }
    writeln!(output, "Front: {}, Rear: {}", queue.front(), queue.rear())?;
    writeln!(output, "{}", RULE)
}
