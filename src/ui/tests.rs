// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Completable and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{cell::Cell, rc::Rc, sync::Arc};

use ratatui::{buffer::Buffer, layout::Rect};
use rstest::rstest;

use super::{
    Aspect, Container, ContainerId, ContainerKind, Frontmost, HookCx, Key, LayoutCx, Layer,
    RenderCx, Scroll, Scrollable, UiState, Widget, WidgetId,
};
use crate::dictionary::demo_word_list;
use crate::model::SearchSession;

#[derive(Default)]
struct Counters {
    resized: Cell<usize>,
    disabled: Cell<usize>,
    rendered: Cell<usize>,
    scrolled: Cell<usize>,
}

struct Swatch {
    layer: Layer,
    rect: Rect,
    fill: char,
    counters: Rc<Counters>,
}

impl Swatch {
    fn boxed(layer: Layer, rect: Rect, fill: char, counters: &Rc<Counters>) -> Box<dyn Widget> {
        Box::new(Self {
            layer,
            rect,
            fill,
            counters: Rc::clone(counters),
        })
    }
}

impl Widget for Swatch {
    fn layer(&self) -> Layer {
        self.layer
    }

    fn title(&mut self, _cx: &RenderCx<'_>) -> String {
        format!("swatch {}", self.fill)
    }

    fn layout(&self, _cx: &LayoutCx<'_>) -> Rect {
        self.rect
    }

    fn render(&mut self, buf: &mut Buffer, area: Rect, _cx: &RenderCx<'_>) {
        self.counters.rendered.set(self.counters.rendered.get() + 1);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_char(self.fill);
            }
        }
    }

    fn post_resize(&mut self, _rect: Rect) {
        self.counters.resized.set(self.counters.resized.get() + 1);
    }

    fn pre_disable(&mut self, _cx: &mut HookCx<'_>) {
        self.counters.disabled.set(self.counters.disabled.get() + 1);
    }

    fn scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }
}

impl Scrollable for Swatch {
    fn scroll(&mut self, _motion: Scroll, cx: &mut HookCx<'_>) {
        self.counters.scrolled.set(self.counters.scrolled.get() + 1);
        cx.mark_self_dirty();
    }
}

fn session() -> SearchSession {
    SearchSession::new(Arc::new(demo_word_list()))
}

fn ui(width: u16, height: u16) -> UiState {
    let mut ui = UiState::default();
    ui.set_screen(Rect::new(0, 0, width, height));
    ui
}

fn clean(ui: &mut UiState, session: &SearchSession) {
    if let Some(active) = ui.active_container() {
        ui.draw(active, session, false);
    }
}

struct Fixture {
    ui: UiState,
    session: SearchSession,
    tab: ContainerId,
    left: WidgetId,
    right: WidgetId,
    aux: WidgetId,
    help: WidgetId,
    counters: Rc<Counters>,
}

fn fixture() -> Fixture {
    let mut ui = ui(100, 40);
    let mut session = session();
    let counters = Rc::new(Counters::default());
    let tab = ui.insert_container(Container::new(ContainerKind::Tab, "Completion", "C", 0));
    let left = ui.insert_widget(Swatch::boxed(Layer::Primary, Rect::new(0, 0, 50, 40), 'l', &counters));
    let right = ui.insert_widget(Swatch::boxed(Layer::Primary, Rect::new(50, 0, 50, 40), 'r', &counters));
    let aux = ui.insert_widget(Swatch::boxed(Layer::Auxiliary, Rect::new(20, 10, 60, 20), 'a', &counters));
    let help = ui.insert_widget(Swatch::boxed(Layer::Overlay, Rect::new(10, 5, 80, 30), 'h', &counters));
    for widget in [left, right, aux, help] {
        ui.add_widget(tab, widget, &mut session);
    }
    ui.link_ring(tab, &[left, right]);
    ui.set_active_container(tab, &mut session);
    Fixture {
        ui,
        session,
        tab,
        left,
        right,
        aux,
        help,
        counters,
    }
}

#[test]
fn dirty_propagation_terminates_on_cycles() {
    let mut fx = fixture();
    clean(&mut fx.ui, &fx.session);
    fx.ui.add_dirty_dependency(fx.left, fx.right);
    fx.ui.add_dirty_dependency(fx.right, fx.left);

    fx.ui.mark_dirty(fx.left);

    assert!(fx.ui.widget_state(fx.left).is_dirty());
    assert!(fx.ui.widget_state(fx.right).is_dirty());
}

#[test]
fn dirty_propagation_is_transitive_but_one_way() {
    let mut fx = fixture();
    fx.ui.on_key(Key::F(1), &mut fx.session);
    clean(&mut fx.ui, &fx.session);
    fx.ui.add_dirty_dependency(fx.left, fx.right);
    fx.ui.add_dirty_dependency(fx.right, fx.aux);

    fx.ui.mark_dirty(fx.right);
    assert!(!fx.ui.widget_state(fx.left).is_dirty());
    assert!(fx.ui.widget_state(fx.aux).is_dirty());

    clean(&mut fx.ui, &fx.session);
    fx.ui.mark_dirty(fx.left);
    assert!(fx.ui.widget_state(fx.right).is_dirty());
    assert!(fx.ui.widget_state(fx.aux).is_dirty());
}

#[test]
fn hidden_layers_start_disabled() {
    let fx = fixture();
    assert!(fx.ui.widget_state(fx.left).is_enabled());
    assert!(fx.ui.widget_state(fx.aux).visibility().is_set(Aspect::Layer));
    assert!(fx.ui.widget_state(fx.help).visibility().is_set(Aspect::Layer));
    assert!(fx.ui.widget_state(fx.aux).surface().is_none());
}

#[test]
fn toggling_the_auxiliary_layer_resizes_and_releases() {
    let mut fx = fixture();
    clean(&mut fx.ui, &fx.session);
    let resized = fx.counters.resized.get();

    fx.ui.on_key(Key::F(1), &mut fx.session);
    assert!(fx.ui.widget_state(fx.aux).is_enabled());
    assert_eq!(fx.counters.resized.get(), resized + 1);
    assert_eq!(fx.ui.active_widget(fx.tab), Some(fx.aux));
    assert_eq!(fx.ui.widget_state(fx.aux).rect(), Rect::new(20, 10, 60, 20));
    assert!(fx.ui.widget_state(fx.aux).surface().is_some());

    clean(&mut fx.ui, &fx.session);
    let disabled = fx.counters.disabled.get();
    fx.ui.on_key(Key::F(1), &mut fx.session);
    assert!(!fx.ui.widget_state(fx.aux).is_enabled());
    assert_eq!(fx.counters.disabled.get(), disabled + 1);
    assert!(fx.ui.widget_state(fx.aux).surface().is_none());
    assert!(fx.ui.widget_state(fx.left).is_dirty());
    assert!(fx.ui.widget_state(fx.right).is_dirty());
    assert_eq!(fx.ui.active_widget(fx.tab), Some(fx.left));
}

#[test]
fn auxiliary_toggle_is_ignored_under_the_overlay() {
    let mut fx = fixture();
    fx.ui.on_key(Key::Char(','), &mut fx.session);
    assert!(fx.ui.container(fx.tab).frontmost().is_overlay());

    fx.ui.on_key(Key::F(2), &mut fx.session);
    assert_eq!(
        fx.ui.container(fx.tab).frontmost(),
        Frontmost::Overlay {
            above_auxiliary: false
        }
    );
    assert!(!fx.ui.widget_state(fx.aux).is_enabled());
}

#[test]
fn showing_the_overlay_only_retitles_the_displaced_widget() {
    let mut fx = fixture();
    clean(&mut fx.ui, &fx.session);

    fx.ui.on_key(Key::Char(','), &mut fx.session);

    let left = fx.ui.widget_state(fx.left);
    assert!(left.is_title_dirty());
    assert!(!left.is_dirty());
    assert!(!fx.ui.widget_state(fx.right).is_title_dirty());
    assert_eq!(fx.ui.active_widget(fx.tab), Some(fx.help));
}

#[test]
fn focus_skips_disabled_neighbors() {
    let mut ui = ui(100, 40);
    let mut session = session();
    let counters = Rc::new(Counters::default());
    let tab = ui.insert_container(Container::new(ContainerKind::Tab, "Completion", "C", 0));
    let ring: Vec<WidgetId> = ['a', 'b', 'c']
        .into_iter()
        .map(|fill| ui.insert_widget(Swatch::boxed(Layer::Primary, Rect::new(0, 0, 10, 10), fill, &counters)))
        .collect();
    for widget in &ring {
        ui.add_widget(tab, *widget, &mut session);
    }
    ui.link_ring(tab, &ring);
    ui.set_active_container(tab, &mut session);
    ui.disable(ring[1], Aspect::Feature, &mut session);

    ui.on_key(Key::Right, &mut session);
    assert_eq!(ui.active_widget(tab), Some(ring[2]));
    ui.on_key(Key::Right, &mut session);
    assert_eq!(ui.active_widget(tab), Some(ring[0]));
    ui.on_key(Key::Left, &mut session);
    assert_eq!(ui.active_widget(tab), Some(ring[2]));
    ui.on_key(Key::Right, &mut session);
    assert_eq!(ui.active_widget(tab), Some(ring[0]));

    ui.disable(ring[2], Aspect::Feature, &mut session);
    ui.on_key(Key::Left, &mut session);
    assert_eq!(ui.active_widget(tab), Some(ring[0]));
}

#[test]
fn hidden_widgets_refuse_focus() {
    let mut fx = fixture();
    fx.ui.disable(fx.right, Aspect::Feature, &mut fx.session);
    assert!(!fx.ui.set_active_widget(fx.tab, fx.right));
    assert_eq!(fx.ui.active_widget(fx.tab), Some(fx.left));

    fx.ui.disable(fx.left, Aspect::Feature, &mut fx.session);
    fx.ui.enable(fx.right, Aspect::Feature, fx.session.settings());
    assert_eq!(fx.ui.focus_first_shown(fx.tab, Layer::Primary), Some(fx.right));
    assert_eq!(fx.ui.active_widget(fx.tab), Some(fx.right));
}

#[test]
fn neighbors_must_share_a_layer() {
    let mut fx = fixture();
    assert!(!fx.ui.set_right_neighbor(fx.tab, fx.left, fx.aux));
    assert!(fx.ui.set_right_neighbor(fx.tab, fx.left, fx.right));
}

#[test]
fn keys_reach_only_the_active_widget() {
    let mut fx = fixture();
    clean(&mut fx.ui, &fx.session);

    let effects = fx.ui.on_key(Key::Down, &mut fx.session);

    assert!(effects.is_empty());
    assert_eq!(fx.counters.scrolled.get(), 1);
    assert!(fx.ui.widget_state(fx.left).is_dirty());
    assert!(!fx.ui.widget_state(fx.right).is_dirty());
}

#[test]
fn draw_skips_clean_widgets_and_force_clear_redraws() {
    let mut fx = fixture();
    clean(&mut fx.ui, &fx.session);
    let rendered = fx.counters.rendered.get();

    fx.ui.draw(fx.tab, &fx.session, false);
    assert_eq!(fx.counters.rendered.get(), rendered);

    fx.ui.draw(fx.tab, &fx.session, true);
    assert_eq!(fx.counters.rendered.get(), rendered + 2);
}

#[rstest]
#[case(79, 40)]
#[case(100, 29)]
fn degraded_screens_only_clear(#[case] width: u16, #[case] height: u16) {
    let mut fx = fixture();
    fx.ui.set_screen(Rect::new(0, 0, width, height));
    fx.ui.resize(fx.tab, fx.session.settings());
    assert!(fx.ui.is_degraded());
    let rendered = fx.counters.rendered.get();

    fx.ui.draw(fx.tab, &fx.session, false);

    assert_eq!(fx.counters.rendered.get(), rendered);
    let surface = fx.ui.widget_state(fx.left).surface().expect("surface");
    assert!(surface.content.iter().all(|cell| cell.symbol() == " "));
}

#[test]
fn geometry_is_clipped_to_the_screen() {
    let mut fx = fixture();
    fx.ui.set_screen(Rect::new(0, 0, 90, 40));
    fx.ui.resize(fx.tab, fx.session.settings());
    assert_eq!(fx.ui.widget_state(fx.right).rect(), Rect::new(50, 0, 40, 40));
}

#[test]
fn present_stacks_layers_back_to_front() {
    let mut fx = fixture();
    fx.ui.on_key(Key::Char(','), &mut fx.session);
    clean(&mut fx.ui, &fx.session);

    let mut frame = Buffer::empty(Rect::new(0, 0, 100, 40));
    fx.ui.present(&mut frame);

    assert_eq!(frame[(2, 2)].symbol(), "l");
    assert_eq!(frame[(97, 2)].symbol(), "r");
    assert_eq!(frame[(40, 20)].symbol(), "h");
}

fn two_containers() -> (Fixture, ContainerId, WidgetId) {
    let mut fx = fixture();
    let page = fx
        .ui
        .insert_container(Container::new(ContainerKind::Page, "Settings", "S", 1));
    let settings = fx.ui.insert_widget(Swatch::boxed(
        Layer::Primary,
        Rect::new(0, 0, 100, 40),
        's',
        &fx.counters,
    ));
    let page_help = fx.ui.insert_widget(Swatch::boxed(
        Layer::Overlay,
        Rect::new(10, 5, 80, 30),
        'H',
        &fx.counters,
    ));
    fx.ui.add_widget(page, settings, &mut fx.session);
    fx.ui.add_widget(page, page_help, &mut fx.session);
    fx.ui.link_containers(fx.tab, page);
    (fx, page, settings)
}

#[test]
fn switching_containers_swaps_enabled_widgets() {
    let (mut fx, page, settings) = two_containers();
    assert!(!fx.ui.widget_state(settings).is_enabled());

    fx.ui.on_key(Key::ShiftRight, &mut fx.session);

    assert_eq!(fx.ui.active_container(), Some(page));
    assert!(fx.ui.widget_state(settings).is_enabled());
    assert!(fx.ui.widget_state(fx.left).visibility().is_set(Aspect::Container));
    assert!(fx.ui.is_active(settings));
    assert!(!fx.ui.is_active(fx.left));

    fx.ui.on_key(Key::ShiftLeft, &mut fx.session);
    assert_eq!(fx.ui.active_container(), Some(fx.tab));
    assert!(fx.ui.widget_state(fx.left).is_enabled());
}

#[test]
fn overlay_follows_across_container_switches() {
    let (mut fx, page, _settings) = two_containers();

    fx.ui.on_key(Key::Char(','), &mut fx.session);
    fx.ui.on_key(Key::Right, &mut fx.session);

    assert_eq!(fx.ui.active_container(), Some(page));
    assert!(fx.ui.container(page).frontmost().is_overlay());

    fx.ui.on_key(Key::Char(','), &mut fx.session);
    fx.ui.on_key(Key::ShiftLeft, &mut fx.session);

    assert_eq!(fx.ui.active_container(), Some(fx.tab));
    assert!(!fx.ui.container(fx.tab).frontmost().is_overlay());
    assert!(!fx.ui.widget_state(fx.help).is_enabled());
}

#[test]
fn widget_shared_by_containers_survives_a_switch() {
    let (mut fx, page, _settings) = two_containers();
    let shared = fx.ui.insert_widget(Swatch::boxed(
        Layer::Primary,
        Rect::new(0, 39, 100, 1),
        'i',
        &fx.counters,
    ));
    fx.ui.add_widget(fx.tab, shared, &mut fx.session);
    fx.ui.add_widget(page, shared, &mut fx.session);
    assert!(fx.ui.widget_state(shared).is_enabled());

    fx.ui.set_active_container(page, &mut fx.session);

    assert!(fx.ui.widget_state(shared).is_enabled());
    assert!(fx.ui.widget_state(shared).surface().is_some());
}
