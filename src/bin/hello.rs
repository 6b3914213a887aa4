use anyhow::Result;
use cpu_panel::ui::panel::PanelWindow;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};

const LINES: [&str; 2] = ["Hello, world!", "This is a simple panel window."];

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoopBuilder::<()>::with_user_event().build();
    let mut panel = PanelWindow::new(&event_loop, "Hello World", (360, 140))?;
    panel.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }
            Event::RedrawRequested(_) => {
                panel.render_lines(&LINES);
            }
            _ => {}
        }
    })
}
