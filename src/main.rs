// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use circle_creator::{
    config::*,
    controllers::{AnimationLoop, Autoplay, LoopCommand, OscController},
    draw::ArcStyle,
    models::{RingEvent, ScreenGeometry},
    views::{draw_ring, ring_status, BackgroundView},
};

struct Model {
    style: StyleConfig,
    background: BackgroundView,
    animation: AnimationLoop,

    // Admission sources besides the mouse
    autoplay: Autoplay,
    osc_controller: Option<OscController>,
    random: rand::rngs::ThreadRng,

    last_update: Instant,
    debug_flag: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => Some(controller),
            Err(err) => {
                log::warn!("OSC disabled, could not bind port {}: {}", config.osc.rx_port, err);
                None
            }
        }
    } else {
        None
    };

    log::info!(
        "ring capacity {}, step {}, tick {}ms",
        config.animation.capacity,
        config.animation.step,
        config.animation.tick_ms
    );

    Model {
        background: BackgroundView::from_config(&config.style),
        animation: AnimationLoop::from_config(&config.animation),
        autoplay: Autoplay::from_config(&config.autoplay),
        osc_controller,
        random: rand::thread_rng(),
        style: config.style,
        last_update: Instant::now(),
        debug_flag: false,
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let geometry = ScreenGeometry::from_rect(app.window_rect());
    let point = geometry.from_nannou(app.mouse.position());
    if geometry.contains(point) {
        model.animation.request_admit(point);
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::A => model.autoplay.toggle(),
        Key::Space => model.animation.toggle_pause(),
        Key::P => model.debug_flag = !model.debug_flag,
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    let geometry = ScreenGeometry::from_rect(app.window_rect());

    if let Some(osc_controller) = model.osc_controller.as_mut() {
        osc_controller.process_messages();
        for command in osc_controller.take_commands() {
            match command {
                LoopCommand::Admit { x, y } => {
                    model.animation.request_admit(pt2(x, y));
                }
                LoopCommand::SetAutoplay(enabled) => model.autoplay.set_enabled(enabled),
                LoopCommand::Pause => model.animation.pause(),
                LoopCommand::Resume => model.animation.resume(),
            }
        }
    }

    let margin = geometry.arc_radius(model.style.size_factor);
    let busy = model.animation.ring().is_transitioning();
    if let Some(point) = model
        .autoplay
        .update(dt, &geometry, margin, busy, &mut model.random)
    {
        model.animation.request_admit(point);
    }

    for event in model.animation.update(dt) {
        match event {
            RingEvent::Admitted { anchor } => log::debug!("circle at {:?} complete", anchor),
            RingEvent::Evicted { anchor } => log::debug!("circle at {:?} left the screen", anchor),
        }
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let geometry = ScreenGeometry::from_rect(app.window_rect());
    let style = ArcStyle::from_config(&model.style, &geometry);

    model.background.draw(&draw);
    draw_ring(&draw, model.animation.ring(), &geometry, &style);

    if model.debug_flag {
        let status = ring_status(model.animation.ring(), model.animation.driver().tick_count());
        let rect = app.window_rect();
        draw.text(&status)
            .x_y(0.0, rect.top() - 20.0)
            .w(rect.w())
            .color(BLACK);
    }

    draw.to_frame(app, &frame).unwrap();
}
