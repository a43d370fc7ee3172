use wireview::colors;
use wireview::prelude::*;
use wireview::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), String> {
    let mut window = Window::new("Wireview", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut pipeline = Pipeline::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut scene = Scene::sample();
    if let Some(path) = std::env::args().nth(1) {
        let model = Model::from_obj(&path).map_err(|e| e.to_string())?;
        scene.models = vec![model];
        scene.validate().map_err(|e| e.to_string())?;
    }

    let mut frame_limiter = FrameLimiter::new(&window);
    let mut is_running = true;

    while is_running {
        match window.poll_events() {
            WindowEvent::Quit => is_running = false,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                pipeline.resize(w, h);
                canvas.resize(w, h);
            }
            WindowEvent::Pan(pan) => scene.view.pan(pan),
            WindowEvent::Screenshot => {
                if let Err(e) = canvas.save_png("wireview.png") {
                    eprintln!("screenshot failed: {e}");
                }
            }
            WindowEvent::None => {}
        }

        match pipeline.render_frame(&scene) {
            Ok(segments) => {
                canvas.clear(colors::BACKGROUND);
                for segment in &segments {
                    canvas.draw_segment(segment);
                }
            }
            // Recoverable: keep showing the last good frame.
            Err(e) => eprintln!("skipping frame: {e}"),
        }

        window.present(canvas.as_bytes())?;
        frame_limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
