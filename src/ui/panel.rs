use crate::model::{PanelStats, UsageHistory};
use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use std::num::NonZeroU32;
use tao::dpi::LogicalSize;
use tao::event_loop::EventLoopWindowTarget;
use tao::window::{Window, WindowBuilder, WindowId};

// Dark theme shared by both demo panels
const BG_COLOR: RGBColor = RGBColor(28, 28, 32);
const GRID_COLOR: RGBColor = RGBColor(45, 45, 52);
const TEXT_COLOR: RGBColor = RGBColor(220, 220, 225);
const ACCENT_COLOR: RGBColor = RGBColor(255, 95, 87);

const LINE_HEIGHT: i32 = 20;

/// A window that presents software-rendered panel frames.
pub struct PanelWindow {
    window: Box<Window>,
    _context: softbuffer::Context<&'static Window>,
    surface: softbuffer::Surface<&'static Window, &'static Window>,
}

impl PanelWindow {
    pub fn new(
        event_loop: &EventLoopWindowTarget<()>,
        title: &str,
        size: (u32, u32),
    ) -> Result<Self> {
        let window = Box::new(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(LogicalSize::new(size.0, size.1))
                .with_resizable(false)
                .build(event_loop)
                .map_err(|e| anyhow!("creating panel window: {}", e))?,
        );

        // The surface borrows the window; boxing pins the window for the
        // lifetime of this struct, which owns both.
        let window_ref: &'static Window = unsafe { &*(window.as_ref() as *const Window) };

        let context = softbuffer::Context::new(window_ref)
            .map_err(|e| anyhow!("creating softbuffer context: {}", e))?;
        let surface = softbuffer::Surface::new(&context, window_ref)
            .map_err(|e| anyhow!("creating softbuffer surface: {}", e))?;

        Ok(Self {
            window,
            _context: context,
            surface,
        })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Renders static text lines, one per row.
    pub fn render_lines(&mut self, lines: &[&str]) {
        self.render_frame(|root| {
            for (i, line) in lines.iter().enumerate() {
                let y = 14 + i as i32 * LINE_HEIGHT;
                let _ = root.draw(&Text::new(
                    (*line).to_string(),
                    (12, y),
                    ("sans-serif", 16).into_font().color(&TEXT_COLOR),
                ));
            }
        });
    }

    /// Renders the live CPU figures and the busy-history chart.
    pub fn render_stats(&mut self, stats: &PanelStats, history: &UsageHistory) {
        let snap = &stats.snapshot;
        let avg_core = if stats.per_core_usage.is_empty() {
            0.0
        } else {
            stats.per_core_usage.iter().sum::<f32>() / stats.per_core_usage.len() as f32
        };
        let lines = [
            format!("user  {:5.1}%", snap.user),
            format!("sys   {:5.1}%", snap.system),
            format!("idle  {:5.1}%", snap.idle),
            format!("nice  {:5.1}%", snap.nice),
            format!("{} cores, avg {:.0}%", stats.core_count, avg_core),
        ];
        let text_height = 14 + lines.len() as i32 * LINE_HEIGHT;

        self.render_frame(|root| {
            let (text_area, chart_area) = root.split_vertically(text_height);
            for (i, line) in lines.iter().enumerate() {
                let y = 14 + i as i32 * LINE_HEIGHT;
                let _ = text_area.draw(&Text::new(
                    line.clone(),
                    (12, y),
                    ("monospace", 16).into_font().color(&TEXT_COLOR),
                ));
            }
            draw_usage_chart(&chart_area, history);
        });
    }

    fn render_frame<F>(&mut self, draw: F)
    where
        F: FnOnce(&DrawingArea<BitMapBackend, Shift>),
    {
        // Physical size for pixel-accurate rendering
        let phys = self.window.inner_size();
        let (width, height) = (phys.width, phys.height);
        if width == 0 || height == 0 {
            return;
        }

        let _ = self.surface.resize(
            NonZeroU32::new(width).unwrap(),
            NonZeroU32::new(height).unwrap(),
        );

        let (w, h) = (width as usize, height as usize);
        let mut pixel_buf = vec![0u8; w * h * 3];

        {
            let backend = BitMapBackend::with_buffer(&mut pixel_buf, (width, height));
            let root = backend.into_drawing_area();
            let _ = root.fill(&BG_COLOR);
            draw(&root);
            let _ = root.present();
        }

        // Copy RGB to softbuffer (ARGB format)
        let mut buf = self.surface.buffer_mut().unwrap();
        for i in 0..w * h {
            let r = pixel_buf[i * 3] as u32;
            let g = pixel_buf[i * 3 + 1] as u32;
            let b = pixel_buf[i * 3 + 2] as u32;
            buf[i] = (255 << 24) | (r << 16) | (g << 8) | b;
        }
        let _ = buf.present();
    }
}

fn draw_usage_chart(area: &DrawingArea<BitMapBackend, Shift>, history: &UsageHistory) {
    let data = history.points();
    let span = history.max_points().max(1);

    let current = data
        .back()
        .map(|v| format!("busy {:.0}%", v))
        .unwrap_or("busy --".into());

    let mut chart = match ChartBuilder::on(area)
        .caption(&current, ("sans-serif", 14).into_font().color(&TEXT_COLOR))
        .margin(6)
        .x_label_area_size(0)
        .y_label_area_size(34)
        .build_cartesian_2d(0..span, 0.0_f32..100.0_f32)
    {
        Ok(chart) => chart,
        Err(_) => return,
    };

    let _ = chart
        .configure_mesh()
        .light_line_style(GRID_COLOR.mix(0.3))
        .bold_line_style(GRID_COLOR.mix(0.6))
        .y_labels(3)
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style(("sans-serif", 10).into_font().color(&TEXT_COLOR.mix(0.7)))
        .draw();

    // Right-align a partial history so the newest sample sits at the edge
    let offset = span.saturating_sub(data.len());
    let series: Vec<(usize, f32)> = data
        .iter()
        .enumerate()
        .map(|(i, &v)| (i + offset, v))
        .collect();

    if !series.is_empty() {
        let _ = chart.draw_series(AreaSeries::new(
            series.iter().cloned(),
            0.0,
            ACCENT_COLOR.mix(0.2).filled(),
        ));
        let _ = chart.draw_series(LineSeries::new(
            series.iter().cloned(),
            ACCENT_COLOR.stroke_width(2),
        ));
    }
}
