use crossbeam_channel as channel;
use std::fmt::Debug;

/// Requests waiting to be handled, oldest first.
///
/// Producers (key presses, commands, the app itself) only ever enqueue; the
/// event processor drains the whole queue once per turn.
pub struct MessageQueue<T> {
    queue: channel::Sender<T>,
    reader: channel::Receiver<T>,
}

impl<T: Debug> Default for MessageQueue<T> {
    fn default() -> Self {
        let (queue, reader) = channel::unbounded();
        Self { queue, reader }
    }
}

impl<T: Debug> MessageQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, req: T) {
        trace!("enqueue: {:?}", req);
        self.queue.send(req);
    }

    pub fn read_all(&self) -> Vec<T> {
        let mut buf = Vec::with_capacity(self.reader.len());
        while let Some(req) = self.reader.try_recv() {
            buf.push(req)
        }
        buf
    }

    pub fn len(&self) -> usize {
        self.reader.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo() {
        let queue = MessageQueue::new();
        assert!(queue.is_empty());

        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.read_all(), vec![1, 2, 3]);
        assert!(queue.is_empty());
        assert!(queue.read_all().is_empty());
    }
}
