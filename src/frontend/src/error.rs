use thiserror::Error;

/// Startup failures only: once the canvas exists the simulation has no
/// fallible surface left.
#[derive(Debug, Error)]
pub enum FrontendError {
	#[error("sdl: {0}")]
	Sdl(String),
	#[error(transparent)]
	Window(#[from] sdl2::video::WindowBuildError),
	#[error(transparent)]
	Canvas(#[from] sdl2::IntegerOrSdlError),
	#[error(transparent)]
	Logger(#[from] log::SetLoggerError),
}
