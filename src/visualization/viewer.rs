//! Bevy 2D front end for the planetary simulation
//!
//! Owns everything the core treats as an external collaborator: the window,
//! input sampling, and the drawing of bodies, trails, the reset button, the
//! HUD, and proximity labels. Each Update tick samples the discrete input
//! into normalized [`InputEvent`]s, applies them to the [`ViewState`], runs
//! one [`step_frame`], and then syncs the drawn entities from the resulting
//! state.

use bevy::app::AppExit;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::engine::step_frame;
use crate::simulation::scenario::Scenario;
use crate::view::camera::{InputEvent, PanDirection, ViewState};
use crate::view::projector::world_to_screen;

/// Logical window size.
pub const WIDTH: f32 = 900.0;
pub const HEIGHT: f32 = 600.0;

/// Astronomical unit, for the distance readout.
pub const AU: f64 = 1.496e11;

/// Cursor distance (px) within which a body shows its label.
const LABEL_RANGE: f64 = 30.0;

const TRAIL_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const BUTTON_IDLE: Color = Color::rgb(0.59, 0.59, 0.59);
const BUTTON_HOVERED: Color = Color::rgb(0.78, 0.78, 0.78);
const LABEL_BG: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct ResetButton;

#[derive(Component)]
struct ZoomText;

#[derive(Component)]
struct HoverLabel;

#[derive(Component)]
struct HoverLabelBox;

pub fn run_viewer(scenario: Scenario) {
    log::info!(
        "starting viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(ViewState::new())
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulation".into(),
                resolution: WindowResolution::new(WIDTH, HEIGHT),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                sample_input_system,
                frame_step_system,
                sync_transforms_system,
                draw_trails_system,
                update_hud_system,
                button_style_system,
                hover_label_system,
            )
                .chain(),
        )
        .run();
}

/// Spawn the 2D camera, one circle sprite per body, the reset button, the
/// HUD text, and the (initially hidden) hover label.
fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        // Min drawn radius of 2 px so small bodies stay visible
        let radius_screen = (body.radius as f32).max(2.0);
        let [r, g, b] = body.color;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::rgb_u8(r, g, b))),
                transform: Transform::from_xyz(0.0, 0.0, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }

    // Reset button, top-left
    commands
        .spawn((
            ButtonBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    left: Val::Px(10.0),
                    top: Val::Px(10.0),
                    width: Val::Px(100.0),
                    height: Val::Px(30.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..Default::default()
                },
                background_color: BackgroundColor(BUTTON_IDLE),
                ..Default::default()
            },
            ResetButton,
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                "Reset",
                TextStyle {
                    font_size: 16.0,
                    color: Color::WHITE,
                    ..Default::default()
                },
            ));
        });

    // HUD: zoom mode and fixed time step
    commands.spawn((
        TextBundle::from_section(
            "Zoom: Out",
            TextStyle {
                font_size: 14.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            left: Val::Px(120.0),
            top: Val::Px(10.0),
            ..Default::default()
        }),
        ZoomText,
    ));
    commands.spawn(
        TextBundle::from_section(
            format!("Time Step: {:.1} hr", scenario.parameters.dt / 3600.0),
            TextStyle {
                font_size: 14.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            left: Val::Px(120.0),
            top: Val::Px(30.0),
            ..Default::default()
        }),
    );

    // Hover label: a boxed name/distance readout that follows the cursor
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: LABEL_BG,
                custom_size: Some(Vec2::new(120.0, 18.0)),
                ..Default::default()
            },
            transform: Transform::from_xyz(0.0, 0.0, 0.9),
            visibility: Visibility::Hidden,
            ..Default::default()
        },
        HoverLabelBox,
    ));
    commands.spawn((
        Text2dBundle {
            text: Text::from_section(
                "",
                TextStyle {
                    font_size: 13.0,
                    color: Color::WHITE,
                    ..Default::default()
                },
            ),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            visibility: Visibility::Hidden,
            ..Default::default()
        },
        HoverLabel,
    ));
}

/// Sample the frame's discrete input into [`InputEvent`]s and apply them
/// atomically to the view state, before the simulation advances.
#[allow(clippy::too_many_arguments)]
fn sample_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    reset_interaction: Query<&Interaction, With<ResetButton>>,
    mut last_cursor: Local<Option<Vec2>>,
    scenario: Res<Scenario>,
    mut view: ResMut<ViewState>,
    mut exit: EventWriter<AppExit>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();
    let over_reset = reset_interaction
        .get_single()
        .map(|i| *i != Interaction::None)
        .unwrap_or(false);

    let mut events = Vec::new();

    if keys.just_pressed(KeyCode::Escape) {
        events.push(InputEvent::Quit);
    }
    if keys.just_pressed(KeyCode::KeyZ) {
        events.push(InputEvent::ToggleZoom);
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        events.push(InputEvent::Pan(PanDirection::Left));
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        events.push(InputEvent::Pan(PanDirection::Right));
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        events.push(InputEvent::Pan(PanDirection::Up));
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        events.push(InputEvent::Pan(PanDirection::Down));
    }

    if let Some(pos) = cursor {
        if buttons.just_pressed(MouseButton::Left) {
            events.push(InputEvent::PointerDown {
                x: pos.x as f64,
                y: pos.y as f64,
                primary: true,
                over_reset,
            });
        }
        if *last_cursor != Some(pos) {
            events.push(InputEvent::PointerMoved {
                x: pos.x as f64,
                y: pos.y as f64,
            });
        }
    }
    if buttons.just_released(MouseButton::Left) {
        events.push(InputEvent::PointerUp { primary: true });
    }
    *last_cursor = cursor;

    for event in &events {
        view.apply(event, &scenario.parameters);
    }
    if view.take_quit_request() {
        exit.send(AppExit);
    }
}

/// Run one atomic simulation frame against the already-updated view state.
fn frame_step_system(
    mut scenario: ResMut<Scenario>,
    mut view: ResMut<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let center = viewport_center(windows.get_single().ok());
    step_frame(&mut scenario, &mut view, center);
}

/// Place each body sprite at its projected screen position.
fn sync_transforms_system(
    scenario: Res<Scenario>,
    view: Res<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    let window = windows.get_single().ok();
    let center = viewport_center(window);
    let scale = view.scale(&scenario.parameters);

    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(body) = scenario.system.bodies.get(*i) {
            // Same projector call as the trail append in step_frame
            let (sx, sy) = world_to_screen(body.x, scale, view.camera, center);
            let world = screen_to_bevy(sx as f32, sy as f32, window);
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
    }
}

/// Draw each body's recorded trail as a dim polyline.
fn draw_trails_system(
    mut gizmos: Gizmos,
    scenario: Res<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let window = windows.get_single().ok();
    for body in &scenario.system.bodies {
        if body.trail.len() < 2 {
            continue;
        }
        gizmos.linestrip_2d(
            body.trail
                .iter()
                .map(|&(sx, sy)| screen_to_bevy(sx as f32, sy as f32, window)),
            TRAIL_COLOR,
        );
    }
}

fn update_hud_system(view: Res<ViewState>, mut query: Query<&mut Text, With<ZoomText>>) {
    for mut text in &mut query {
        let mode = if view.zoomed { "In" } else { "Out" };
        text.sections[0].value = format!("Zoom: {mode}");
    }
}

/// Highlight the reset button while the cursor is over it.
fn button_style_system(
    mut query: Query<(&Interaction, &mut BackgroundColor), With<ResetButton>>,
) {
    for (interaction, mut background) in &mut query {
        *background = match interaction {
            Interaction::None => BackgroundColor(BUTTON_IDLE),
            _ => BackgroundColor(BUTTON_HOVERED),
        };
    }
}

/// Show "name: distance AU" above a body when the cursor is within range.
/// Distance is measured from body 0, the central reference.
#[allow(clippy::type_complexity)]
fn hover_label_system(
    scenario: Res<Scenario>,
    view: Res<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut label: Query<
        (&mut Text, &mut Transform, &mut Visibility),
        (With<HoverLabel>, Without<HoverLabelBox>),
    >,
    mut label_box: Query<
        (&mut Sprite, &mut Transform, &mut Visibility),
        (With<HoverLabelBox>, Without<HoverLabel>),
    >,
) {
    let Ok((mut text, mut transform, mut visibility)) = label.get_single_mut() else {
        return;
    };
    let Ok((mut box_sprite, mut box_transform, mut box_visibility)) =
        label_box.get_single_mut()
    else {
        return;
    };

    let window = windows.get_single().ok();
    let hovered = window
        .and_then(|w| w.cursor_position())
        .and_then(|cursor| hovered_body(&scenario, &view, cursor, window));

    let Some((sx, sy, radius, value)) = hovered else {
        *visibility = Visibility::Hidden;
        *box_visibility = Visibility::Hidden;
        return;
    };

    // Anchor the box just above the body
    let anchor = screen_to_bevy(sx as f32, sy as f32 - radius as f32 - 15.0, window);
    box_sprite.custom_size = Some(Vec2::new(value.len() as f32 * 7.5 + 10.0, 18.0));
    transform.translation.x = anchor.x;
    transform.translation.y = anchor.y;
    box_transform.translation.x = anchor.x;
    box_transform.translation.y = anchor.y;
    text.sections[0].value = value;
    *visibility = Visibility::Visible;
    *box_visibility = Visibility::Visible;
}

/// First body whose screen position lies within [`LABEL_RANGE`] of the
/// cursor, with its screen position, radius, and label text.
fn hovered_body(
    scenario: &Scenario,
    view: &ViewState,
    cursor: Vec2,
    window: Option<&Window>,
) -> Option<(i32, i32, f64, String)> {
    let center = viewport_center(window);
    let scale = view.scale(&scenario.parameters);
    let sun = scenario.system.bodies.first()?;
    let sun_pos = sun.x;

    for body in &scenario.system.bodies {
        let (sx, sy) = world_to_screen(body.x, scale, view.camera, center);
        let dx = cursor.x as f64 - sx as f64;
        let dy = cursor.y as f64 - sy as f64;
        if (dx * dx + dy * dy).sqrt() < LABEL_RANGE {
            let dist_au = (body.x - sun_pos).norm() / AU;
            return Some((sx, sy, body.radius, format!("{}: {:.2} AU", body.name, dist_au)));
        }
    }
    None
}

/// Midpoint of the viewport in top-left-origin logical pixels.
pub fn viewport_center(window: Option<&Window>) -> (f64, f64) {
    match window {
        Some(w) => (w.width() as f64 / 2.0, w.height() as f64 / 2.0),
        None => (WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0),
    }
}

/// Convert top-left-origin screen pixels to Bevy's centered, y-up world
/// coordinates used by the 2D camera.
fn screen_to_bevy(sx: f32, sy: f32, window: Option<&Window>) -> Vec2 {
    let (w, h) = match window {
        Some(win) => (win.width(), win.height()),
        None => (WIDTH, HEIGHT),
    };
    Vec2::new(sx - w / 2.0, h / 2.0 - sy)
}
