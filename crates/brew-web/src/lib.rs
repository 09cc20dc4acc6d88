pub mod runner;

pub use runner::GameRunner;
pub use brew_engine::InputEvent;

/// Route `log` output to the browser console and panics to `console.error`.
/// Safe to call more than once.
pub fn install_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Generate the `#[wasm_bindgen]` surface for a game.
///
/// The calling crate must have `wasm_bindgen::prelude::*` in scope and the
/// game type must provide `fn new() -> Self`. Calls made before `game_init`
/// are ignored: inputs are dropped, getters return zero or null.
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// brew_web::export_game!(MyGame, "my-game");
/// ```
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        thread_local! {
            static RUNNER: std::cell::RefCell<Option<$crate::GameRunner<$game_type>>> =
                std::cell::RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        fn send(event: $crate::InputEvent) {
            if with_runner(|r| r.push_input(event)).is_none() {
                log::warn!("{}: input before game_init dropped", $game_name);
            }
        }

        #[wasm_bindgen]
        pub fn game_init() {
            $crate::install_logging();
            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            runner.init();
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            send($crate::InputEvent::PointerDown { x, y });
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            send($crate::InputEvent::PointerUp { x, y });
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            send($crate::InputEvent::PointerMove { x, y });
        }

        #[wasm_bindgen]
        pub fn game_pointer_leave() {
            send($crate::InputEvent::PointerLeave);
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            send($crate::InputEvent::KeyDown { key_code });
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            send($crate::InputEvent::KeyUp { key_code });
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            send($crate::InputEvent::Custom { kind, a, b, c });
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        $crate::runner_getters! {
            get_header_ptr -> *const f32 = header_ptr or std::ptr::null();
            get_instances_ptr -> *const f32 = instances_ptr or std::ptr::null();
            get_instance_count -> u32 = instance_count or 0;
            get_atlas_split -> u32 = atlas_split or 0;
            get_shapes_ptr -> *const f32 = shapes_ptr or std::ptr::null();
            get_shape_count -> u32 = shape_count or 0;
            get_effects_ptr -> *const f32 = effects_ptr or std::ptr::null();
            get_effects_vertex_count -> u32 = effects_vertex_count or 0;
            get_sound_events_ptr -> *const u8 = sound_events_ptr or std::ptr::null();
            get_sound_events_len -> u32 = sound_events_len or 0;
            get_game_events_ptr -> *const f32 = game_events_ptr or std::ptr::null();
            get_game_events_len -> u32 = game_events_len or 0;
            get_world_width -> f32 = world_width or 0.0;
            get_world_height -> f32 = world_height or 0.0;
            get_buffer_total_floats -> u32 = buffer_total_floats or 0;
        }
    };
}

/// One `#[wasm_bindgen]` getter per line, forwarding to a runner method.
/// Used by [`export_game!`]; relies on its `with_runner`.
#[doc(hidden)]
#[macro_export]
macro_rules! runner_getters {
    ($($name:ident -> $ret:ty = $method:ident or $default:expr;)*) => {
        $(
            #[wasm_bindgen]
            pub fn $name() -> $ret {
                with_runner(|r| r.$method()).unwrap_or($default)
            }
        )*
    };
}
