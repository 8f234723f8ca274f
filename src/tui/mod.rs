pub mod app;
mod event;
mod terminal;
mod views;
mod widgets;

use std::path::Path;

use app::App;

use crate::tree::TreeState;

pub fn run(file: &str, initial_state: TreeState) -> anyhow::Result<()> {
    terminal::install_panic_hook();

    let mut app = App::new(Path::new(file), initial_state)?;
    let mut terminal = terminal::init()?;

    loop {
        terminal.draw(|frame| app.view(frame))?;

        if let Some(ev) = event::poll_event()? {
            let msg = app.handle_event(ev);
            app.update(msg);
        }

        if app.should_quit {
            break;
        }
    }

    terminal::restore()?;
    Ok(())
}
