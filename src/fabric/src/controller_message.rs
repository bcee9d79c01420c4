use protocol::input::PointerSample;

pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	Reset,
	Resize([f32; 2]),
	Pointer(PointerSample),
}
