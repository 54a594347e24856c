// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Animation shown while a slow task (scanning for or loading a dictionary) runs.

use std::{
    io,
    panic,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    widgets::{Block, Clear, Paragraph},
    Terminal,
};

use crate::model::Animation;

use super::centered_box;

const FRAME_INTERVAL: Duration = Duration::from_millis(107);
const POLL_INTERVAL: Duration = Duration::from_micros(17);
const FRAMES_PER_CYCLE: usize = 24;
/// Each marker is held for this many frames.
const MARKER_HOLD: usize = 3;
const MARKERS: [char; 4] = ['|', '/', '-', '\\'];
const BANNER: [&str; 5] = [
    " __   ____   _____ ",
    "/_ | / __ \\ |___  |",
    " | || |  | |   / / ",
    " | || |__| |  / /  ",
    " |_| \\____/  /_/   ",
];

/// Runs `task` on a worker thread and plays `animation` centered in `area` until it finishes.
///
/// A panic in `task` is resumed on the calling thread once the animation has stopped.
pub fn run_with_busy_animation<B, T>(
    terminal: &mut Terminal<B>,
    area: Rect,
    animation: Animation,
    task: impl FnOnce() -> T + Send,
) -> io::Result<T>
where
    B: Backend + Send,
    T: Send,
{
    let done = AtomicBool::new(false);
    thread::scope(|scope| {
        let worker = scope.spawn(task);
        let animator = scope.spawn(|| animate(terminal, area, animation, &done));

        let outcome = worker.join();
        done.store(true, Ordering::Release);
        let drawn = animator.join();

        let value = outcome.unwrap_or_else(|payload| panic::resume_unwind(payload));
        drawn.unwrap_or_else(|payload| panic::resume_unwind(payload))?;
        Ok(value)
    })
}

fn animate<B: Backend>(
    terminal: &mut Terminal<B>,
    area: Rect,
    animation: Animation,
    done: &AtomicBool,
) -> io::Result<()> {
    let mut index = 0usize;
    let mut last_frame: Option<Instant> = None;
    while !done.load(Ordering::Acquire) {
        if last_frame.map_or(true, |at| at.elapsed() >= FRAME_INTERVAL) {
            draw_frame(terminal, area, animation, index)?;
            index = (index + 1) % FRAMES_PER_CYCLE;
            last_frame = Some(Instant::now());
        }
        thread::sleep(POLL_INTERVAL);
    }
    Ok(())
}

fn draw_frame<B: Backend>(
    terminal: &mut Terminal<B>,
    area: Rect,
    animation: Animation,
    index: usize,
) -> io::Result<()> {
    let lines = frame_lines(animation, index);
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    terminal.draw(|f| {
        let target = centered_box(width + 4, height + 2, area.intersection(f.area()));
        f.render_widget(Clear, target);
        f.render_widget(
            Paragraph::new(lines.join("\n"))
                .alignment(Alignment::Center)
                .block(Block::bordered()),
            target,
        );
    })?;
    Ok(())
}

/// Text of frame `index` of `animation`.
fn frame_lines(animation: Animation, index: usize) -> Vec<String> {
    let marker = MARKERS[(index % FRAMES_PER_CYCLE / MARKER_HOLD) % MARKERS.len()];
    match animation {
        Animation::Default => vec![format!("{marker} loading")],
        Animation::CheersTo107 => BANNER
            .iter()
            .map(|line| (*line).to_owned())
            .chain(std::iter::once(format!("{marker}  cheers  {marker}")))
            .collect(),
    }
}
