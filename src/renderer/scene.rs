//! Scene building: snapshot in, draw commands out

use super::commands::DrawCommand;
use crate::settings::Settings;
use crate::sim::Snapshot;

/// Center line dash geometry
const DASH_WIDTH: f32 = 4.0;
const DASH_LENGTH: f32 = 20.0;
const DASH_SPACING: f32 = 40.0;

/// Distance of the score text from the top edge
const SCORE_BASELINE: f32 = 50.0;

/// Build the full frame for `snapshot`, back to front
pub fn build_scene(snapshot: &Snapshot, settings: &Settings) -> Vec<DrawCommand> {
    let palette = &settings.palette;
    let (width, height) = snapshot.board;
    let mut commands = vec![DrawCommand::Clear {
        color: palette.background.clone(),
    }];

    if settings.center_line {
        let mut y = DASH_LENGTH;
        while y < height {
            commands.push(DrawCommand::Rect {
                x: width / 2.0 - DASH_WIDTH / 2.0,
                y,
                w: DASH_WIDTH,
                h: DASH_LENGTH,
                color: palette.center_line.clone(),
            });
            y += DASH_SPACING;
        }
    }

    for (paddle, color) in [
        (&snapshot.player, &palette.player),
        (&snapshot.opponent, &palette.opponent),
    ] {
        commands.push(DrawCommand::Rect {
            x: paddle.x,
            y: paddle.y,
            w: paddle.width,
            h: paddle.height,
            color: color.clone(),
        });
    }

    commands.push(DrawCommand::Circle {
        x: snapshot.ball.x,
        y: snapshot.ball.y,
        r: snapshot.ball.radius,
        color: palette.ball.clone(),
    });

    if settings.show_scores {
        for (score, x) in [
            (snapshot.player.score, width / 4.0),
            (snapshot.opponent.score, width * 3.0 / 4.0),
        ] {
            commands.push(DrawCommand::Text {
                text: score.to_string(),
                x,
                y: SCORE_BASELINE,
                font: settings.hud_font.clone(),
                color: palette.text.clone(),
            });
        }
    }

    if settings.show_level {
        commands.push(DrawCommand::Text {
            text: format!("Level {}", snapshot.level),
            x: width / 2.0 + DASH_LENGTH,
            y: height - DASH_LENGTH,
            font: settings.hud_font.clone(),
            color: palette.text.clone(),
        });
    }

    commands
}
