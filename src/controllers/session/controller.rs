use std::convert::Infallible;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::ExplorerConfig;
use crate::controllers::session::data::frame::Frame;
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::ports::input_source::{InputSource, Key};
use crate::controllers::session::ports::render_sink::RenderSink;
use crate::core::actions::render_frame::FrameRenderer;
use crate::core::navigation::pan_direction::PanDirection;
use crate::core::navigation::viewport_model::ViewportModel;

/// Pan keys in the order they are checked. Only the first held one applies.
const PAN_KEYS: [(Key, PanDirection); 4] = [
    (Key::PanUp, PanDirection::Up),
    (Key::PanDown, PanDirection::Down),
    (Key::PanRight, PanDirection::Right),
    (Key::PanLeft, PanDirection::Left),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub canvas_size: u32,
    pub max_iterations: u32,
    pub shift_percentage: f64,
    pub poll_interval: Duration,
}

impl From<&ExplorerConfig> for SessionSettings {
    fn from(config: &ExplorerConfig) -> Self {
        Self {
            canvas_size: config.canvas_size,
            max_iterations: config.max_iterations,
            shift_percentage: config.shift_percentage,
            poll_interval: config.poll_interval(),
        }
    }
}

/// What a single [`ExplorerSession::step`] did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    pub zoomed: bool,
    pub zoom_factor_changed: bool,
    pub panned: Option<PanDirection>,
    /// Ids of the frames presented during the step, in order.
    pub presented: Vec<u64>,
}

impl StepOutcome {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.zoomed && !self.zoom_factor_changed && self.panned.is_none()
    }
}

pub struct ExplorerSession {
    model: ViewportModel,
    renderer: FrameRenderer,
    settings: SessionSettings,
    redraws: u64,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(model: ViewportModel, renderer: FrameRenderer, settings: SessionSettings) -> Self {
        Self {
            model,
            renderer,
            settings,
            redraws: 0,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Result<Self, SessionError> {
        let model = ViewportModel::new(config.viewport()?, config.zoom_factor()?);
        let renderer = FrameRenderer::new(config.colour_map);

        Ok(Self::new(model, renderer, SessionSettings::from(config)))
    }

    #[must_use]
    pub fn model(&self) -> &ViewportModel {
        &self.model
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Id the next rendered frame will carry.
    #[must_use]
    pub fn next_frame_id(&self) -> u64 {
        self.redraws
    }

    /// Renders and presents the initial view.
    pub fn start<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> Result<u64, SessionError> {
        info!(
            "rendering {size}x{size} canvas, {} iterations, {} colour map",
            self.settings.max_iterations,
            self.renderer.colour_map_kind(),
            size = self.settings.canvas_size
        );
        self.render_and_present(sink)
    }

    /// One poll: click zoom, then zoom-factor keys, then at most one pan.
    pub fn step<I, S>(&mut self, input: &I, sink: &mut S) -> Result<StepOutcome, SessionError>
    where
        I: InputSource + ?Sized,
        S: RenderSink + ?Sized,
    {
        let mut outcome = StepOutcome::default();

        if input.pointer_pressed() {
            self.model.zoom_at(input.pointer_position());
            outcome.zoomed = true;
            outcome.presented.push(self.render_and_present(sink)?);
        }

        if input.is_key_held(Key::ZoomIn) {
            self.model.increase_zoom();
            outcome.zoom_factor_changed = true;
        }

        if input.is_key_held(Key::ZoomOut) && self.model.decrease_zoom() {
            outcome.zoom_factor_changed = true;
        }

        let held_pan = PAN_KEYS
            .iter()
            .find(|(key, _)| input.is_key_held(*key))
            .map(|&(_, direction)| direction);

        if let Some(direction) = held_pan {
            self.model.pan(direction, self.settings.shift_percentage);
            outcome.panned = Some(direction);
            outcome.presented.push(self.render_and_present(sink)?);
        }

        Ok(outcome)
    }

    /// Renders the initial view, then polls forever. Returns only on error.
    pub fn run<I, S>(&mut self, input: &I, sink: &mut S) -> Result<Infallible, SessionError>
    where
        I: InputSource + ?Sized,
        S: RenderSink + ?Sized,
    {
        self.start(sink)?;

        loop {
            self.step(input, sink)?;
            std::thread::sleep(self.settings.poll_interval);
        }
    }

    fn render_and_present<S: RenderSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<u64, SessionError> {
        let start = Instant::now();
        let raster = self.renderer.render(
            self.model.viewport(),
            self.settings.canvas_size,
            self.settings.max_iterations,
        )?;
        let render_duration = start.elapsed();

        let id = self.redraws;
        self.redraws += 1;
        debug!("rendered frame {id} in {render_duration:?}");

        sink.present(&Frame {
            id,
            raster,
            render_duration,
        })?;

        Ok(id)
    }
}
