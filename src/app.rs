//! Per-frame orchestration: sample input, integrate the pose, rebuild the
//! draw list, hand it to the GPU. One synchronous pass per display refresh.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::warn;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::arm::{self, DrawCall, TransformStack};
use crate::camera::Camera;
use crate::geometry;
use crate::gpu::GpuContext;
use crate::input::InputState;
use crate::mapper::{DisplayMode, Mapper};
use crate::pose::JointState;

pub fn run(event_loop: EventLoop<()>) -> Result<()> {
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Robot Arm")
            .with_inner_size(LogicalSize::new(1024.0, 768.0))
            .build(&event_loop)?,
    );

    // Shapes load into the shared buffers exactly once, before any draw.
    let (bank, shapes) = geometry::build();
    let mut gpu = pollster::block_on(GpuContext::new(window.clone(), &bank))?;

    let size = window.inner_size();
    let mut camera = Camera::new(size.width as f32 / size.height.max(1) as f32);
    gpu.write_projection(camera.projection());

    let mut pose = JointState::default();
    let mut input = InputState::default();
    let mut mapper = Mapper::default();
    let mut mode = DisplayMode::default();
    let mut last_frame: Option<Instant> = None;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape {
                        elwt.exit();
                    }
                    input.set_key(code, event.state.is_pressed());
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                input.set_shift(modifiers.state().shift_key());
            }
            WindowEvent::Resized(new_size) => {
                gpu.resize(new_size.width, new_size.height);
                camera.set_aspect(new_size.width as f32 / new_size.height.max(1) as f32);
                gpu.write_projection(camera.projection());
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = last_frame
                    .map(|prev| (now - prev).as_secs_f32())
                    .unwrap_or(0.0);
                last_frame = Some(now);

                let was_perspective = mode.perspective;
                mapper.update(&mut pose, &mut mode, &input, dt);
                if mode.perspective != was_perspective {
                    camera.set_perspective(mode.perspective);
                    gpu.write_projection(camera.projection());
                }

                let segment = if mode.wireframe {
                    shapes.wire_cube
                } else {
                    shapes.solid_cube
                };
                let mut draws = vec![DrawCall {
                    shape: shapes.axes,
                    model_view: camera.view(),
                }];
                let mut stack = TransformStack::new(camera.view());
                arm::render_arm(&mut stack, &pose, segment, &mut draws);

                match gpu.render(&draws) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                        warn!("surface lost, reconfiguring");
                        gpu.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        warn!("out of GPU memory, exiting");
                        elwt.exit();
                    }
                    Err(err) => warn!("frame skipped: {err}"),
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
