mod app;
mod arm;
mod camera;
mod geometry;
mod gpu;
mod input;
mod mapper;
mod pose;

use anyhow::Result;
use winit::event_loop::EventLoop;

fn main() -> Result<()> {
    env_logger::init();
    let event_loop = EventLoop::new()?;
    app::run(event_loop)
}
