pub mod piece;

use std::iter::FusedIterator;

use log::{debug, info};
use rand::rngs::StdRng;

use crate::common::generator::{random_kind, session_rng};
use crate::queue::piece::Piece;

pub const CAPACITY: usize = 5;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("Queue is full! Play a piece first.")]
    Full,
    #[error("Queue is empty! No pieces to play.")]
    Empty,
}

// `size` alone decides full/empty; `rear` is derived from `front` and `size`.
#[derive(Debug)]
pub struct PieceQueue {
    slots: [Option<Piece>; CAPACITY],
    front: usize,
    size: usize,
    next_id: u32,
    rng: StdRng,
}

impl PieceQueue {
    pub fn new(rng: StdRng) -> PieceQueue {
        let mut queue = PieceQueue {
            slots: std::array::from_fn(|_| None),
            front: 0,
            size: 0,
            next_id: 1,
            rng,
        };

        for _ in 0..CAPACITY {
            let piece = queue.generate();
            if queue.enqueue(piece).is_err() {
                break;
            }
        }
        info!("Piece queue initialized with {} pieces", queue.size);

        queue
    }

    pub fn from_seed(seed: Option<u64>) -> PieceQueue {
        PieceQueue::new(session_rng(seed))
    }

    pub fn generate(&mut self) -> Piece {
        let piece = Piece::new(random_kind(&mut self.rng), self.next_id);
        self.next_id += 1;
        debug!("Generated {:?} piece with id {}", piece.get_kind(), piece.get_id());
        piece
    }

    pub fn enqueue(&mut self, piece: Piece) -> Result<&Piece, QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }

        let slot = self.slot_at(self.size);
        self.size += 1;
        let stored = self.slots[slot].insert(piece);
        debug!("Enqueued piece {} into slot {:?}", stored, slot);

        Ok(stored)
    }

    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let slot = self.front;
        let piece = self.slots[slot].take().ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % CAPACITY;
        self.size -= 1;
        debug!("Dequeued piece {} from slot {:?}", piece, slot);

        Ok(piece)
    }

    // Full is checked before generating so a refused insert spends no id.
    pub fn push_generated(&mut self) -> Result<&Piece, QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }

        let piece = self.generate();
        self.enqueue(piece)
    }

    pub fn inspect(&self) -> Iter<'_> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.size == CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn front(&self) -> usize {
        self.front
    }

    // When empty this points just behind `front`, i.e. the last slot written.
    pub fn rear(&self) -> usize {
        (self.front + self.size + CAPACITY - 1) % CAPACITY
    }

    fn slot_at(&self, offset: usize) -> usize {
        (self.front + offset) % CAPACITY
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a> {
    queue: &'a PieceQueue,
    offset: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Piece;

    fn next(&mut self) -> Option<&'a Piece> {
        if self.offset >= self.queue.size {
            return None;
        }

        let slot = self.queue.slot_at(self.offset);
        self.offset += 1;
        self.queue.slots[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.size.saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
