use std::sync::mpsc::channel;
use std::time::Duration;

use log::info;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use fabric::controller_message::ControllerMessage;
use fabric::world::FabricWorld;
use protocol::input::PointerSample;
use protocol::user_event::UserEvent;
use sdlrender::renderer::Renderer;

mod error;
use error::FrontendError;

const WINDOW_SIZE: (u32, u32) = (1280, 800);

pub fn main() -> Result<(), FrontendError> {
	simple_logger::SimpleLogger::new()
		.with_level(log::LevelFilter::Info)
		.init()?;

	let sdl_context = sdl2::init().map_err(FrontendError::Sdl)?;
	let video_subsystem = sdl_context.video().map_err(FrontendError::Sdl)?;
	let window = video_subsystem
		.window("fabric", WINDOW_SIZE.0, WINDOW_SIZE.1)
		.position_centered()
		.resizable()
		.build()?;
	let canvas = window.into_canvas().build()?;
	let mut renderer = Renderer::new(canvas);
	let mut event_pump = sdl_context.event_pump().map_err(FrontendError::Sdl)?;

	let (tx, rx) = channel();
	let (ctl_tx, ctl_rx) = channel();
	std::thread::spawn(move || {
		let mut world =
			FabricWorld::new(WINDOW_SIZE.0 as f32, WINDOW_SIZE.1 as f32);
		world.run_thread(tx, ctl_rx);
	});
	info!("physics thread up");

	let mut down = false;
	'running: loop {
		for event in event_pump.poll_iter() {
			match event {
				Event::Quit { .. }
				| Event::KeyDown {
					keycode: Some(Keycode::Q),
					..
				}
				| Event::KeyDown {
					keycode: Some(Keycode::Escape),
					..
				} => break 'running,
				Event::KeyDown {
					keycode: Some(keycode),
					..
				} => match keycode {
					Keycode::Space => {
						let _ = ctl_tx.send(ControllerMessage::TogglePause);
					}
					Keycode::S => {
						let _ = ctl_tx.send(ControllerMessage::FrameForward);
					}
					Keycode::R => {
						let _ = ctl_tx.send(ControllerMessage::Reset);
						renderer.invalidate_cache();
					}
					Keycode::C => renderer.toggle_render_mode(),
					_ => {}
				},
				Event::MouseMotion { x, y, .. } => {
					let _ = ctl_tx.send(ControllerMessage::Pointer(
						PointerSample::at([x as f32, y as f32], down),
					));
				}
				Event::MouseButtonDown {
					mouse_btn: MouseButton::Left,
					x,
					y,
					..
				} => {
					down = true;
					let _ = ctl_tx.send(ControllerMessage::Pointer(
						PointerSample::at([x as f32, y as f32], true),
					));
				}
				Event::MouseButtonUp {
					mouse_btn: MouseButton::Left,
					x,
					y,
					..
				} => {
					down = false;
					let _ = ctl_tx.send(ControllerMessage::Pointer(
						PointerSample::at([x as f32, y as f32], false),
					));
				}
				// touch/pen path: normalized coords, real pressure
				Event::FingerDown {
					x, y, pressure, ..
				}
				| Event::FingerMotion {
					x, y, pressure, ..
				} => {
					let (w, h) = renderer.output_size();
					let sample = PointerSample {
						pos: [x * w as f32, y * h as f32],
						down: true,
						pressure: Some(pressure),
						tilt: [0., 0.],
						pen: true,
					};
					let _ =
						ctl_tx.send(ControllerMessage::Pointer(sample));
				}
				Event::FingerUp { x, y, .. } => {
					let (w, h) = renderer.output_size();
					let mut sample = PointerSample::at(
						[x * w as f32, y * h as f32],
						false,
					);
					sample.pen = true;
					let _ =
						ctl_tx.send(ControllerMessage::Pointer(sample));
				}
				Event::Window {
					win_event: WindowEvent::Resized(w, h),
					..
				} => {
					let _ = ctl_tx.send(ControllerMessage::Resize([
						w as f32, h as f32,
					]));
					renderer.invalidate_cache();
				}
				_ => {}
			}
		}

		let mut last_model = None;
		while let Ok(UserEvent::Update(model, info)) = rx.try_recv() {
			renderer.set_title(&format!(
				"fabric - {:.0} fps, {} links, {} sparks",
				info.avg_fps, info.link_len, info.spark_len,
			));
			last_model = Some(model);
		}
		if let Some(model) = last_model {
			renderer.draw(&model);
		}
		std::thread::sleep(Duration::from_millis(5));
	}
	Ok(())
}
