use crossbeam_channel::Receiver;
use imgui_glfw_rs::glfw::{self, Action, Key, MouseButton};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

use crate::audio_engine::{AudioEngineSettings, SynthAudio};
use crate::input_bridge::{InputConfig, LaunchBridge};
use crate::listener::{ChannelListener, FireworksEvent};
use crate::overlay::GameOverlay;
use crate::physic_engine::{PhysicConfig, PhysicEngine, PhysicEngineFireworks};
use crate::renderer_engine::{GlPresenter, Renderer, RendererConfig, RendererEngine};
use crate::room::events::JoinRoom;
use crate::room::{
    ClientEvent, LaunchPayload, MockRoom, OfflineRoom, Player, RoomConfig, RoomMode, RoomState,
    RoomTransport,
};
use crate::simulator::Simulator;
use crate::window_engine::WindowEngine;

pub type FireworksSimulator = Simulator<Renderer, PhysicEngineFireworks, SynthAudio>;

/// Ensemble des fichiers de configuration de l'application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub physic: PhysicConfig,
    pub renderer: RendererConfig,
    pub input: InputConfig,
    pub room: RoomConfig,
}

impl AppConfig {
    /// Charge `physic.toml`, `renderer.toml`, `input.toml` et `room.toml` depuis `dir`.
    /// Un fichier absent ou invalide retombe sur les valeurs par défaut.
    pub fn load_from_dir(dir: &str) -> Self {
        Self {
            physic: load_or_default(dir, "physic.toml", PhysicConfig::from_file),
            renderer: load_or_default(dir, "renderer.toml", RendererConfig::from_file),
            input: load_or_default(dir, "input.toml", InputConfig::from_file),
            room: load_or_default(dir, "room.toml", RoomConfig::from_file),
        }
    }
}

fn load_or_default<T: Default>(
    dir: &str,
    file: &str,
    load: impl Fn(&str) -> anyhow::Result<T>,
) -> T {
    let path = format!("{}/{}", dir.trim_end_matches('/'), file);
    match load(&path) {
        Ok(config) => {
            info!("⚙️ Config loaded: {}", path);
            config
        }
        Err(e) => {
            warn!("⚠️ Config {} unavailable ({}), using defaults", path, e);
            T::default()
        }
    }
}

/// Transport du salon selon le mode configuré.
pub fn make_transport(config: &RoomConfig, current_user: Player) -> Box<dyn RoomTransport> {
    match config.mode {
        RoomMode::Mock => Box::new(MockRoom::new(config, current_user)),
        RoomMode::Offline => Box::new(OfflineRoom::new(current_user)),
    }
}

/// Racine de composition de l'application fenêtrée.
pub struct App<W: WindowEngine> {
    window_engine: W,
    simulator: FireworksSimulator,
    presenter: GlPresenter,
    overlay: GameOverlay,
    room: RoomState,
    transport: Box<dyn RoomTransport>,
    events: Receiver<FireworksEvent>,
    config: AppConfig,
    config_dir: String,
    cursor: (f32, f32),
    started_at: Instant,
}

impl<W: WindowEngine> App<W> {
    /// Le contexte OpenGL de `window_engine` doit être actif.
    pub fn new(window_engine: W, config_dir: &str) -> anyhow::Result<Self> {
        let config = AppConfig::load_from_dir(config_dir);

        let presenter = unsafe { GlPresenter::new()? };

        let mut simulator = Simulator::new(
            Renderer::new(&config.renderer),
            PhysicEngineFireworks::new(&config.physic),
            synth_audio(),
            LaunchBridge::new(&config.input, None),
        );
        let (listener, events) = ChannelListener::unbounded();
        simulator.set_listener(Box::new(listener));

        let current_user = Player::random_current_user(&mut rand::rng());
        info!("🙂 Playing as {} ({})", current_user.name, current_user.color);
        let room = RoomState::new(current_user.clone(), config.room.chat_history_limit);
        let transport = make_transport(&config.room, current_user);

        Ok(Self {
            window_engine,
            simulator,
            presenter,
            overlay: GameOverlay::new(),
            room,
            transport,
            events,
            config,
            config_dir: config_dir.to_string(),
            cursor: (0.0, 0.0),
            started_at: Instant::now(),
        })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.simulator.start();
        self.sync_surface();

        let user = self.room.current_user().clone();
        self.transport.send(ClientEvent::JoinRoom(JoinRoom {
            name: user.name,
            color: user.color,
        }));

        info!("🎆 Entering main loop");
        while !self.window_engine.should_close() {
            self.window_engine.poll_events();
            self.handle_window_events();
            self.step(self.started_at.elapsed());
            self.window_engine.swap_buffers();
        }
        info!("👋 Main loop exited");
        Ok(())
    }

    fn handle_window_events(&mut self) {
        let events: Vec<_> = glfw::flush_messages(self.window_engine.get_events()).collect();
        let now = self.started_at.elapsed();

        for (_, event) in events {
            let imgui_system = self.window_engine.get_imgui_system_mut();
            imgui_system
                .glfw
                .handle_event(&mut imgui_system.context, &event);
            let io = imgui_system.context.io();
            let (capture_mouse, capture_keyboard) = (io.want_capture_mouse, io.want_capture_keyboard);

            match event {
                glfw::WindowEvent::FramebufferSize(_, _) => self.sync_surface(),
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    self.window_engine.set_should_close(true)
                }
                glfw::WindowEvent::Key(Key::R, _, Action::Press, _) if !capture_keyboard => {
                    self.reload_config()
                }
                glfw::WindowEvent::CursorPos(x, y) => {
                    self.cursor = (x as f32, y as f32);
                    self.simulator.pointer_move(self.cursor.0, self.cursor.1);
                }
                glfw::WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _)
                    if !capture_mouse =>
                {
                    let (x, y) = self.cursor;
                    if let Err(e) = self.simulator.pointer_down(x, y, now) {
                        debug!("Pointer launch rejected: {}", e);
                    }
                }
                glfw::WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
                    self.simulator.pointer_up()
                }
                glfw::WindowEvent::CursorEnter(false) => self.simulator.pointer_leave(),
                glfw::WindowEvent::Focus(false) => self.simulator.pointer_cancel(),
                _ => {}
            }
        }
    }

    /// Taille logique = taille fenêtre ; dpr = framebuffer / fenêtre.
    fn sync_surface(&mut self) {
        let metrics = self.window_engine.surface_metrics();

        match self
            .simulator
            .resize(metrics.width, metrics.height, metrics.dpr)
        {
            Ok(()) => info!(
                "🖥️ Surface: {} x {} (dpr {:.2})",
                metrics.width, metrics.height, metrics.dpr
            ),
            Err(e) => warn!("⚠️ Surface unavailable: {}", e),
        }
        self.transport
            .set_surface_size(metrics.width, metrics.height);
    }

    fn step(&mut self, now: Duration) {
        for event in self.transport.poll(now) {
            if let Some(payload) = self.room.apply(event) {
                self.replay_remote_launch(payload);
            }
        }

        self.simulator.frame(now);

        for event in self.events.try_iter() {
            match event {
                FireworksEvent::Launched(request) => {
                    self.room.stats.record_launch();
                    let payload = LaunchPayload {
                        sx: request.origin().x,
                        sy: request.origin().y,
                        tx: request.target().x,
                        ty: request.target().y,
                        hue: request.hue().unwrap_or_default(),
                    };
                    self.transport.send(ClientEvent::FireworkLaunch(payload));
                }
                FireworksEvent::Exploded(_) => self.room.stats.record_explosion(),
            }
        }

        self.present();
    }

    fn replay_remote_launch(&mut self, payload: LaunchPayload) {
        let LaunchPayload { sx, sy, tx, ty, hue } = payload;
        match self.simulator.launch(sx, sy, tx, ty, Some(hue)) {
            Ok(id) => {
                debug!("Remote rocket #{} launched", id);
                self.room.stats.record_launch();
            }
            Err(e) => warn!("⚠️ Remote launch rejected: {}", e),
        }
    }

    fn present(&mut self) {
        let viewport = self.window_engine.get_framebuffer_size();
        let background = self.config.renderer.background;
        unsafe {
            match self.simulator.renderer().surface() {
                Some(surface) => self.presenter.present(surface, background, viewport),
                None => self.presenter.clear(background),
            }
        }

        let (window, imgui_system) = self.window_engine.get_window_and_imgui_mut();
        let ui = imgui_system.glfw.frame(window, &mut imgui_system.context);
        let submitted = self.overlay.draw(ui, &self.room);
        // Get references again after draw
        let (win, sys) = self.window_engine.get_window_and_imgui_mut();
        sys.glfw.draw(&mut sys.context, win);

        if let Some(text) = submitted {
            self.transport.send(ClientEvent::chat(text));
        }
    }

    pub fn reload_config(&mut self) {
        let config = AppConfig::load_from_dir(&self.config_dir);

        if self.simulator.physic_mut().reload_config(&config.physic) {
            info!("🔄 Physic config reloaded");
        }
        self.simulator.renderer_mut().reload_config(&config.renderer);
        self.simulator.bridge_mut().reload_config(&config.input);
        if config.room != self.config.room {
            info!("Room config changed: applied on next start");
        }

        self.config = config;
        self.sync_surface();
    }

    pub fn simulator(&self) -> &FireworksSimulator {
        &self.simulator
    }

    pub fn room(&self) -> &RoomState {
        &self.room
    }

    pub fn close(&mut self) {
        self.simulator.close();
        self.presenter.close();
    }
}

/// Synthé de l'application, indépendant des plafonds de la physique.
fn synth_audio() -> SynthAudio {
    SynthAudio::new(AudioEngineSettings::default())
}
