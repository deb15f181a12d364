/// Scripted window for render loop tests

use std::collections::VecDeque;
use crate::error::{Error, Result};
use crate::render::{Window, WindowEvent};

/// Window returning pre-recorded event batches, one batch per poll
#[derive(Debug)]
pub struct MockWindow {
    pub size: (u32, u32),
    pub swap_count: u32,
    pub poll_count: u32,
    pub fail_swap: bool,
    batches: VecDeque<Vec<WindowEvent>>,
}

impl MockWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            swap_count: 0,
            poll_count: 0,
            fail_swap: false,
            batches: VecDeque::new(),
        }
    }

    /// Queue the events returned by a future poll
    pub fn push_events(&mut self, events: Vec<WindowEvent>) {
        self.batches.push_back(events);
    }
}

impl Window for MockWindow {
    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.poll_count += 1;
        let events = self.batches.pop_front().unwrap_or_default();
        for event in &events {
            if let WindowEvent::Resized { width, height } = event {
                self.size = (*width, *height);
            }
        }
        events
    }

    fn swap_buffers(&mut self) -> Result<()> {
        if self.fail_swap {
            return Err(Error::BackendError("mock: swap failed".to_string()));
        }
        self.swap_count += 1;
        Ok(())
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.size
    }
}
