use anyhow::Result;
use cpu_panel::config::Config;
use cpu_panel::model::{PanelStats, UsageHistory};
use cpu_panel::monitor::SystemMonitor;
use cpu_panel::ui::panel::PanelWindow;
use std::time::{Duration, Instant};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load();
    let event_loop = EventLoopBuilder::<()>::with_user_event().build();

    let mut monitor = SystemMonitor::new();
    let mut history = UsageHistory::new(config.history_points);
    let mut panel = PanelWindow::new(&event_loop, "CPU Usage", (320, 280))?;

    let poll_interval = Duration::from_millis(config.poll_interval_ms.max(1));
    let mut last_stats: Option<PanelStats> = None;

    match monitor.poll() {
        Ok(stats) => {
            history.push(stats.snapshot.busy());
            last_stats = Some(stats);
        }
        Err(err) => {
            if config.exit_on_sample_error {
                return Err(err.into());
            }
            log::warn!("cpu sample unavailable: {}", err);
        }
    }
    let mut last_tick = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        let now = Instant::now();
        if now.duration_since(last_tick) >= poll_interval {
            match monitor.poll() {
                Ok(stats) => {
                    history.push(stats.snapshot.busy());
                    last_stats = Some(stats);
                    panel.request_redraw();
                }
                Err(err) => {
                    // A failed sample is not a quit signal; keep the previous
                    // frame's figures unless configured otherwise.
                    log::warn!("cpu sample unavailable: {}", err);
                    if config.exit_on_sample_error {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
            }
            last_tick = now;
        }
        *control_flow = ControlFlow::WaitUntil(last_tick + poll_interval);

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                window_id,
                ..
            } if window_id == panel.id() => {
                *control_flow = ControlFlow::Exit;
            }
            Event::RedrawRequested(window_id) if window_id == panel.id() => {
                if let Some(stats) = &last_stats {
                    panel.render_stats(stats, &history);
                }
            }
            _ => {}
        }
    })
}
