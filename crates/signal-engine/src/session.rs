//! Interactive session: turns frames of input into world operations.

use signal_core::NodeId;
use tracing::warn;

use crate::config::{ConfigError, EngineConfig};
use crate::editor::{Cycle, Editor};
use crate::input::{InputFrame, Key, MouseButton};
use crate::log::{LogRing, SignalLog};
use crate::metrics::StepMetrics;
use crate::world::SignalWorld;

/// What one frame did.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Whether a beat happened.
    pub beat: bool,
    /// The node under the mouse.
    pub hover: Option<NodeId>,
    /// The frame delta after clamping.
    pub dt: f32,
    /// Metrics of the world update.
    pub metrics: StepMetrics,
}

/// A world, its editor, and the panel toggles of the interactive loop.
#[derive(Debug)]
pub struct Session<L = LogRing> {
    world: SignalWorld<L>,
    editor: Editor,
    show_info: bool,
    show_log: bool,
}

impl Session<LogRing> {
    /// A session over a fresh world built from `config`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_world(SignalWorld::new(config)?))
    }

    /// Like [`new`](Self::new), then load `config.state_path` if it holds
    /// a compatible state. A missing or rejected file leaves the fresh
    /// world in place.
    pub fn open(config: EngineConfig) -> Result<Self, ConfigError> {
        let mut session = Self::new(config)?;
        session.load_state_file();
        Ok(session)
    }
}

impl<L: SignalLog> Session<L> {
    /// A session over an existing world.
    pub fn from_world(world: SignalWorld<L>) -> Self {
        Self {
            world,
            editor: Editor::new(),
            show_info: true,
            show_log: false,
        }
    }

    /// The world.
    pub fn world(&self) -> &SignalWorld<L> {
        &self.world
    }

    /// Mutable access to the world.
    pub fn world_mut(&mut self) -> &mut SignalWorld<L> {
        &mut self.world
    }

    /// The editor and its clipboard.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Whether the info panel is shown.
    pub fn show_info(&self) -> bool {
        self.show_info
    }

    /// Whether the log panel is shown.
    pub fn show_log(&self) -> bool {
        self.show_log
    }

    /// Process one frame of input and `dt` seconds of elapsed time.
    ///
    /// In order: time accumulation, global keys, the world update, edits
    /// on the hovered node, and the tick count. Store and load failures
    /// are logged and otherwise ignored; the session keeps running on
    /// its current state.
    pub fn frame(&mut self, input: &InputFrame, dt: f32) -> FrameReport {
        let dt = self.world.advance_time(dt);
        let ctrl = input.ctrl();

        // ── Global keys ────────────────────────────────────────
        if ctrl {
            if input.pressed(Key::Q) {
                self.world.reinit();
            }
            if input.pressed(Key::S) {
                self.store_state_file();
            }
            if input.pressed(Key::R) {
                self.load_state_file();
            }
        } else {
            if input.pressed(Key::Space) {
                let paused = self.world.is_paused();
                self.world.set_paused(!paused);
            }
            if input.pressed(Key::M) {
                self.show_info = !self.show_info;
            }
            if input.pressed(Key::L) {
                self.show_log = !self.show_log;
            }
            let step = self.world.config().bpm_step;
            if input.pressed(Key::Num1) {
                let bpm = (self.world.bpm() - step).max(step);
                self.world.set_bpm(bpm);
            }
            if input.pressed(Key::Num2) {
                let bpm = self.world.bpm() + step;
                self.world.set_bpm(bpm);
            }
        }

        // ── World update ───────────────────────────────────────
        let metrics = self.world.update(!ctrl && input.pressed(Key::Q));

        // ── Hover edits ────────────────────────────────────────
        let (mx, my) = input.mouse;
        let hover = if input.clicked(MouseButton::Right) {
            None
        } else {
            self.world.grid().hit_test(mx, my)
        };
        if let Some(id) = hover {
            self.edit(input, ctrl, id);
        }

        self.world.advance_tick();
        FrameReport {
            beat: metrics.beat,
            hover,
            dt,
            metrics,
        }
    }

    fn store_state_file(&mut self) {
        let path = self.world.config().state_path.clone();
        if let Err(e) = self.world.store(&path) {
            warn!(path = %path.display(), error = %e, "store skipped");
        }
    }

    fn load_state_file(&mut self) {
        let path = self.world.config().state_path.clone();
        if let Err(e) = self.world.load(&path) {
            warn!(path = %path.display(), error = %e, "load skipped");
        }
    }

    fn edit(&mut self, input: &InputFrame, ctrl: bool, id: NodeId) {
        let world = &mut self.world;
        if input.clicked(MouseButton::Left) {
            world.trigger(id);
        }
        if ctrl {
            if input.pressed(Key::C) {
                self.editor.copy(world, id);
            }
            if input.pressed(Key::X) {
                self.editor.cut(world, id);
            }
            if input.pressed(Key::V) {
                self.editor.paste(world, id);
            }
            if input.scroll_y != 0 {
                self.editor.nudge_value(world, id, input.scroll_y.signum());
            }
        } else {
            if input.pressed(Key::R) {
                self.editor.reset_node(world, id);
            }
            if input.scroll_y > 0 {
                self.editor.cycle_kind(world, id, Cycle::Forward);
            } else if input.scroll_y < 0 {
                self.editor.cycle_kind(world, id, Cycle::Backward);
            }
        }
    }
}
