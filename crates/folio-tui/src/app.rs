use std::sync::Arc;
use std::time::Duration;

use folio_core::animation::{GridOverlay, Repeat, Tween, Typewriter};
use folio_core::carousel::{CarouselController, SwipeTracker};
use folio_core::config::TrackerConfig;
use folio_core::contact::{ContactField, ContactForm, ContactRules, Toast, ToastQueue};
use folio_core::content::{BlogPost, PageContent};
use folio_core::nav::{ActiveSectionTracker, NavItem, NavTarget};
use folio_core::scheduler::Interval;
use folio_core::viewport::is_compact;
use folio_core::AppConfig;
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use crate::event::ContactResult;
use crate::layout::PageLayout;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::widgets;

/// Rows taken by the navbar (or tab bar) and the status bar
pub const CHROME_ROWS: u16 = 2;

const GLITCH_EVERY: Duration = Duration::from_secs(3);

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing into a contact form field
    EditContact(ContactField),
    Help,
}

/// Screen regions that react to the mouse, rebuilt every frame
#[derive(Debug, Clone, Default)]
pub struct Hitboxes {
    pub nav: Vec<(Rect, NavTarget)>,
    /// Carousel cards in draw order
    pub cards: Vec<(Rect, usize)>,
    pub dots: Vec<(Rect, usize)>,
    pub fields: Vec<(Rect, ContactField)>,
    /// Whole carousel stage, where drags become swipes
    pub stage: Option<Rect>,
}

impl Hitboxes {
    /// Topmost box containing the point
    fn find<T: Copy>(boxes: &[(Rect, T)], col: u16, row: u16) -> Option<T> {
        boxes
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(Position::new(col, row)))
            .map(|(_, value)| *value)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub content: PageContent,
    pub nav_items: Vec<NavItem>,
    pub layout: PageLayout,
    pub tracker: ActiveSectionTracker,
    pub carousel: CarouselController,
    pub swipe: SwipeTracker,
    pub scroll: ScrollAnimator,
    pub grid: GridOverlay,
    pub contact_form: ContactForm,
    pub contact_rules: ContactRules,
    pub toasts: ToastQueue,
    /// A contact submission is in flight
    pub submitting: bool,
    pub mode: Mode,
    pub hitboxes: Hitboxes,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Terminal size
    pub width: u16,
    pub height: u16,
    /// Clock reading for the current frame
    pub now: Duration,
    started_at: Duration,
    typewriter: Typewriter,
    cursor_blink: Tween,
    glitch_timer: Interval,
    glitch: Tween,
    glitch_started: Option<Duration>,
    /// The page is moving because of wheel or keys, not a nav jump
    user_scrolling: bool,
    /// Current drag already produced a swipe
    drag_fired: bool,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        content: PageContent,
        width: u16,
        height: u16,
        now: Duration,
    ) -> folio_core::Result<Self> {
        let tracker_config = TrackerConfig {
            nav_offset: config.ui.nav_offset_rows as f64,
            ..config.tracker.clone()
        };
        let contact_rules = ContactRules::from_config(&config.contact)?;
        let typewriter = Typewriter::from_expertise(
            content.hero().map(|h| h.expertise.as_str()).unwrap_or_default(),
        );
        let grid = GridOverlay::new(config.ui.grid_cell_cols as f64, config.ui.grid_cell_rows as f64);

        let mut app = Self {
            theme: Theme::default(),
            nav_items: content.nav_items(),
            layout: PageLayout::default(),
            tracker: ActiveSectionTracker::new(&tracker_config),
            carousel: CarouselController::new(content.blog_posts().len()),
            swipe: SwipeTracker::new(config.ui.swipe_threshold_cols as f64),
            scroll: ScrollAnimator::new(config.ui.scroll.clone()),
            grid,
            contact_form: ContactForm::default(),
            contact_rules,
            toasts: ToastQueue::new(config.contact.toast_ttl()),
            submitting: false,
            mode: Mode::Normal,
            hitboxes: Hitboxes::default(),
            should_quit: false,
            status_message: None,
            pending_key: None,
            width: 0,
            height: 0,
            now,
            started_at: now,
            typewriter,
            cursor_blink: Tween::new(Duration::from_millis(500))
                .repeat(Repeat::Infinite)
                .yoyo(true),
            glitch_timer: Interval::new(GLITCH_EVERY, now),
            glitch: Tween::new(Duration::from_millis(100))
                .repeat(Repeat::Count(1))
                .yoyo(true),
            glitch_started: None,
            user_scrolling: false,
            drag_fired: false,
            content,
            config,
        };

        app.resize(width, height);
        let active = app.tracker.mount(&app.layout);
        info!(
            sections = app.layout.slots.len(),
            posts = app.carousel.item_count(),
            %active,
            "Page mounted"
        );
        Ok(app)
    }

    // ---- layout ----

    /// Rebuild the page layout for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;

        let rows = height.saturating_sub(CHROME_ROWS);
        let scroll = self.layout.scroll;
        let mut layout = PageLayout::compute(
            self.content
                .slices
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_section())
                .map(|(i, s)| (s.slice_type(), i, widgets::section_height(s, width))),
            width,
            rows,
        );
        layout.scroll = scroll.min(layout.max_scroll());
        self.scroll.set(layout.scroll);
        self.layout = layout;
    }

    /// Narrow terminals swap the top navbar for a bottom tab bar
    pub fn is_nav_compact(&self) -> bool {
        is_compact(self.width as f64, self.config.ui.nav_breakpoint_cols as f64)
    }

    pub fn is_carousel_compact(&self) -> bool {
        is_compact(self.width as f64, self.config.ui.carousel_breakpoint_cols as f64)
    }

    /// Nav items shown at the current width
    pub fn visible_nav_items(&self) -> Vec<&NavItem> {
        NavItem::visible(&self.nav_items, self.is_nav_compact())
    }

    pub fn active_section(&self) -> NavTarget {
        self.tracker.active()
    }

    // ---- frame clock ----

    /// Advance timers and animations to `now`
    pub fn tick(&mut self, now: Duration) {
        self.now = now;

        let before = self.layout.scroll;
        self.layout.scroll = self.scroll.update(now, self.layout.max_scroll());
        if self.layout.scroll != before && self.user_scrolling {
            self.tracker.on_scroll(now);
        }
        if !self.scroll.needs_update() {
            self.user_scrolling = false;
        }

        if let Some(active) = self.tracker.poll(now, &self.layout) {
            debug!(%active, "Navbar highlight moved");
        }

        if self.glitch_timer.poll(now) > 0 {
            self.glitch_started = Some(now);
        }
        if let Some(started) = self.glitch_started {
            if self.glitch.is_finished(now.saturating_sub(started)) {
                self.glitch_started = None;
            }
        }

        self.toasts.prune(now);
    }

    /// Whether the next frame should come sooner than the idle tick
    pub fn needs_fast_update(&self) -> bool {
        self.scroll.needs_update() || self.tracker.has_pending() || self.glitch_started.is_some()
    }

    fn elapsed(&self) -> Duration {
        self.now.saturating_sub(self.started_at)
    }

    /// Typed-so-far hero expertise
    pub fn hero_text(&self) -> &str {
        self.typewriter.text_at(self.elapsed())
    }

    /// Cursor brightness in [0, 1]
    pub fn cursor_opacity(&self) -> f64 {
        1.0 - self.cursor_blink.progress(self.elapsed())
    }

    /// Horizontal jitter of the glitching heading, zero when idle
    pub fn glitch_offset(&self) -> u16 {
        match self.glitch_started {
            Some(started) => {
                let p = self.glitch.progress(self.now.saturating_sub(started));
                (p * 2.0).round() as u16
            }
            None => 0,
        }
    }

    // ---- scrolling ----

    fn user_scroll(&mut self) {
        self.user_scrolling = true;
    }

    pub fn scroll_down(&mut self) {
        self.scroll.line_down(self.layout.max_scroll());
        self.user_scroll();
    }

    pub fn scroll_up(&mut self) {
        self.scroll.line_up(self.layout.max_scroll());
        self.user_scroll();
    }

    pub fn scroll_lines(&mut self, delta: i32) {
        self.scroll.scroll_by(delta, self.layout.max_scroll());
        self.user_scroll();
    }

    pub fn half_page_down(&mut self) {
        self.scroll
            .half_page_down(self.layout.viewport_rows, self.layout.max_scroll());
        self.user_scroll();
    }

    pub fn half_page_up(&mut self) {
        self.scroll
            .half_page_up(self.layout.viewport_rows, self.layout.max_scroll());
        self.user_scroll();
    }

    pub fn page_down(&mut self) {
        self.scroll
            .page_down(self.layout.viewport_rows, self.layout.max_scroll());
        self.user_scroll();
    }

    pub fn page_up(&mut self) {
        self.scroll
            .page_up(self.layout.viewport_rows, self.layout.max_scroll());
        self.user_scroll();
    }

    pub fn jump_to_top(&mut self) {
        self.scroll.scroll_to(0, self.layout.max_scroll(), self.now);
        self.user_scroll();
    }

    pub fn jump_to_bottom(&mut self) {
        let max = self.layout.max_scroll();
        self.scroll.scroll_to(max, max, self.now);
        self.user_scroll();
    }

    // ---- navigation ----

    /// Navbar click: highlight the target and glide to its section
    pub fn navigate(&mut self, target: NavTarget) {
        match self.tracker.navigate_to(target, &self.layout) {
            Some(offset) => {
                self.user_scrolling = false;
                let row = offset.round().clamp(0.0, u16::MAX as f64) as u16;
                self.scroll.scroll_to(row, self.layout.max_scroll(), self.now);
            }
            None => self.set_status(format!("No {} section on this page", target.label())),
        }
    }

    /// Move the highlight to the next (or previous) visible section link
    pub fn cycle_section(&mut self, forward: bool) {
        let mut targets: Vec<NavTarget> = Vec::new();
        for item in self.visible_nav_items() {
            if item.is_section_link() && !targets.contains(&item.target) {
                targets.push(item.target);
            }
        }
        if targets.is_empty() {
            return;
        }

        let len = targets.len();
        let next = match targets.iter().position(|t| *t == self.active_section()) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.navigate(targets[next]);
    }

    // ---- carousel ----

    pub fn active_post(&self) -> Option<&BlogPost> {
        self.content.blog_posts().get(self.carousel.active_index())
    }

    /// Dot navigation, 1-based as typed
    pub fn jump_to_post(&mut self, number: usize) {
        let index = number.wrapping_sub(1);
        if let Err(e) = self.carousel.jump_to(index) {
            debug!("Ignoring dot jump: {}", e);
            self.set_status(format!("No post #{}", number));
        }
    }

    /// Link of the centre card
    pub fn active_post_link(&self) -> Option<String> {
        self.active_post()
            .and_then(|p| p.post_link.as_ref())
            .map(|u| u.to_string())
    }

    // ---- mouse ----

    pub fn pointer_down(&mut self, col: u16, row: u16) {
        if let Some(target) = Hitboxes::find(&self.hitboxes.nav, col, row) {
            self.navigate(target);
            return;
        }
        if let Some(field) = Hitboxes::find(&self.hitboxes.fields, col, row) {
            self.mode = Mode::EditContact(field);
            return;
        }
        if let Some(index) = Hitboxes::find(&self.hitboxes.dots, col, row) {
            let _ = self.carousel.jump_to(index);
            return;
        }
        if self
            .hitboxes
            .stage
            .is_some_and(|stage| stage.contains(Position::new(col, row)))
        {
            self.swipe.begin(col as f64);
            self.drag_fired = false;
        }
    }

    pub fn pointer_drag(&mut self, col: u16) {
        if let Some(direction) = self.swipe.update(col as f64) {
            self.carousel.apply_swipe(direction);
            self.drag_fired = true;
        }
    }

    /// Release; a press that never became a swipe counts as a card click
    pub fn pointer_up(&mut self, col: u16, row: u16) {
        let was_pressed = self.swipe.is_swiping() || self.drag_fired;
        self.swipe.end();
        if was_pressed && !self.drag_fired {
            if let Some(index) = Hitboxes::find(&self.hitboxes.cards, col, row) {
                self.carousel.click(index);
            }
        }
        self.drag_fired = false;
    }

    // ---- contact ----

    pub fn start_editing(&mut self) {
        if self.layout.slot("contact").is_some() {
            self.navigate(NavTarget::Contact);
        }
        self.mode = Mode::EditContact(ContactField::Name);
    }

    pub fn editing_field(&self) -> Option<ContactField> {
        match self.mode {
            Mode::EditContact(field) => Some(field),
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.editing_field() {
            self.contact_form.field_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.editing_field() {
            self.contact_form.field_mut(field).pop();
        }
    }

    pub fn next_field(&mut self) {
        if let Some(field) = self.editing_field() {
            self.mode = Mode::EditContact(field.next());
        }
    }

    pub fn prev_field(&mut self) {
        if let Some(field) = self.editing_field() {
            self.mode = Mode::EditContact(field.prev());
        }
    }

    /// Hand out the form for delivery unless a send is already running
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.contact_form.clone())
    }

    pub fn finish_submit(&mut self, result: ContactResult) {
        self.submitting = false;
        let mut toast: Toast = result.toast;
        // Show for the full lifetime from arrival, however slow the send was
        toast.created_at = self.now;
        if !toast.is_error() {
            self.contact_form.clear();
            self.mode = Mode::Normal;
        }
        self.toasts.push(toast);
    }

    // ---- misc ----

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn set_pending_key(&mut self, key: char) {
        self.pending_key = Some(key);
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::EditContact(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::{ContentSource, EmbeddedContentSource};
    use folio_core::contact::ToastKind;

    const MS: Duration = Duration::from_millis(1);

    fn app_with(config: AppConfig) -> App {
        let content = EmbeddedContentSource.load().unwrap();
        App::new(Arc::new(config), content, 120, 40, Duration::ZERO).unwrap()
    }

    fn app() -> App {
        app_with(AppConfig::default())
    }

    fn instant_scroll() -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        config
    }

    #[test]
    fn test_mounts_on_home() {
        let app = app();
        assert_eq!(app.active_section(), NavTarget::Home);
        assert!(app.tracker.is_mounted());
        assert_eq!(app.layout.viewport_rows, 38);
        assert!(app.layout.slots.iter().all(|s| s.height >= 38));
    }

    #[test]
    fn test_navigate_scrolls_to_section_minus_offset() {
        let mut app = app_with(instant_scroll());
        let blog_top = app.layout.slot("blog").map(|s| s.top).unwrap();

        app.navigate(NavTarget::Blogs);
        app.tick(MS);
        assert_eq!(app.active_section(), NavTarget::Blogs);
        assert_eq!(app.layout.scroll, blog_top - 2);

        // Programmatic scrolling does not arm the tracker
        assert!(!app.tracker.has_pending());
    }

    #[test]
    fn test_user_scroll_updates_highlight_after_debounce() {
        let mut app = app_with(instant_scroll());
        let about_top = app.layout.slot("about_me").map(|s| s.top).unwrap();

        app.scroll_lines(about_top as i32);
        app.tick(10 * MS);
        assert!(app.tracker.has_pending());
        assert_eq!(app.active_section(), NavTarget::Home);

        app.tick(60 * MS);
        assert_eq!(app.active_section(), NavTarget::About);
    }

    #[test]
    fn test_cycle_section_wraps() {
        let mut app = app_with(instant_scroll());
        app.cycle_section(false);
        assert_eq!(app.active_section(), NavTarget::Contact);
        app.cycle_section(true);
        assert_eq!(app.active_section(), NavTarget::Home);
    }

    #[test]
    fn test_compact_widths() {
        let mut app = app();
        assert!(!app.is_nav_compact());
        app.resize(70, 30);
        assert!(app.is_nav_compact());
        assert!(app.is_carousel_compact());
        let labels: Vec<_> = app.visible_nav_items().iter().map(|i| i.target).collect();
        assert_eq!(
            labels,
            vec![
                NavTarget::Home,
                NavTarget::About,
                NavTarget::Projects,
                NavTarget::Contact
            ]
        );
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut app = app_with(instant_scroll());
        app.jump_to_bottom();
        app.tick(MS);
        assert_eq!(app.layout.scroll, app.layout.max_scroll());

        app.resize(120, 200);
        assert!(app.layout.scroll <= app.layout.max_scroll());
    }

    #[test]
    fn test_dot_jump() {
        let mut app = app();
        app.jump_to_post(3);
        assert_eq!(app.carousel.active_index(), 2);
        app.jump_to_post(0);
        app.jump_to_post(99);
        assert_eq!(app.carousel.active_index(), 2);
        assert!(app.status_message.is_some());
        assert!(app.active_post_link().is_some());
    }

    #[test]
    fn test_drag_swipes_once() {
        let mut app = app();
        app.hitboxes.stage = Some(Rect::new(0, 10, 120, 10));

        app.pointer_down(60, 12);
        app.pointer_drag(58);
        assert_eq!(app.carousel.active_index(), 0);
        app.pointer_drag(50);
        assert_eq!(app.carousel.active_index(), 1);
        app.pointer_drag(20);
        assert_eq!(app.carousel.active_index(), 1);
        app.pointer_up(20, 12);
        assert_eq!(app.carousel.active_index(), 1);
    }

    #[test]
    fn test_click_on_side_card() {
        let mut app = app();
        app.hitboxes.stage = Some(Rect::new(0, 10, 120, 10));
        app.hitboxes.cards = vec![
            (Rect::new(20, 10, 30, 10), 4),
            (Rect::new(70, 10, 30, 10), 1),
            (Rect::new(45, 10, 30, 10), 0),
        ];

        app.pointer_down(90, 12);
        app.pointer_up(90, 12);
        assert_eq!(app.carousel.active_index(), 1);

        // Overlap resolves to the card drawn last (the centre one)
        app.hitboxes.cards = vec![
            (Rect::new(20, 10, 30, 10), 0),
            (Rect::new(70, 10, 30, 10), 2),
            (Rect::new(45, 10, 30, 10), 1),
        ];
        app.pointer_down(47, 12);
        app.pointer_up(47, 12);
        assert_eq!(app.carousel.active_index(), 1);
    }

    #[test]
    fn test_nav_hitbox_navigates() {
        let mut app = app_with(instant_scroll());
        app.hitboxes.nav = vec![(Rect::new(50, 0, 8, 1), NavTarget::Contact)];
        app.pointer_down(52, 0);
        assert_eq!(app.active_section(), NavTarget::Contact);
    }

    #[test]
    fn test_typewriter_and_blink() {
        let mut app = app();
        assert_eq!(app.hero_text(), "");
        assert!((app.cursor_opacity() - 1.0).abs() < 1e-9);

        app.tick(1500 * MS);
        assert_eq!(app.hero_text(), "Web Development");

        app.tick(2500 * MS);
        assert!(app.cursor_opacity() < 1e-9);
    }

    #[test]
    fn test_glitch_fires_every_three_seconds() {
        let mut app = app();
        app.tick(2999 * MS);
        assert!(!app.needs_fast_update());

        app.tick(3000 * MS);
        app.tick(3100 * MS);
        assert_eq!(app.glitch_offset(), 2);
        app.tick(3300 * MS);
        assert_eq!(app.glitch_offset(), 0);
    }

    #[test]
    fn test_contact_editing_and_submit() {
        let mut app = app();
        app.start_editing();
        assert_eq!(app.editing_field(), Some(ContactField::Name));
        for c in "Jo".chars() {
            app.input_char(c);
        }
        app.next_field();
        app.input_char('x');
        app.backspace();
        assert_eq!(app.contact_form.name, "Jo");
        assert_eq!(app.contact_form.email, "");

        let form = app.begin_submit();
        assert!(form.is_some());
        assert!(app.begin_submit().is_none());

        app.tick(5000 * MS);
        app.finish_submit(ContactResult {
            toast: Toast::success("Message sent successfully!", Duration::ZERO),
        });
        assert!(!app.submitting);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.contact_form, ContactForm::default());
        assert_eq!(
            app.toasts.latest(app.now).map(|t| t.kind),
            Some(ToastKind::Success)
        );
    }

    #[test]
    fn test_failed_submit_keeps_form() {
        let mut app = app();
        app.start_editing();
        app.input_char('J');
        app.begin_submit();
        app.finish_submit(ContactResult {
            toast: Toast::error("Name must be at least 2 characters", Duration::ZERO),
        });
        assert_eq!(app.contact_form.name, "J");
        assert!(app.is_input_mode());
    }
}
