use crossterm::event::{self, Event};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(200);

pub fn poll_event() -> anyhow::Result<Option<Event>> {
    if event::poll(TICK)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
