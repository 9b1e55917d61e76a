//! Install-prompt mediation.
//!
//! The platform may offer to install the page as a standalone app. The
//! offer (an opaque signal) is captured, the install buttons are revealed,
//! and the first button activation hands the signal back to the host to
//! show the prompt. The signal is consumed exactly once.

use crate::backend::{Display, PageBackend};
use crate::event::InstallOutcome;
use crate::registry::ElementRegistry;

/// What an install-button activation resolved to.
#[derive(Debug, PartialEq)]
pub enum InstallRequest<S> {
    /// Show the platform prompt for this signal.
    Prompt(S),
    /// No offer is pending; the user was told installation is unavailable.
    Unavailable,
}

/// Runtime state for the deferred install signal.
#[derive(Debug)]
pub struct InstallState<S> {
    /// Pending offer from the platform, if any.
    deferred: Option<S>,
    /// Number of prompts shown whose answer has not arrived yet.
    awaiting: usize,
}

impl<S> Default for InstallState<S> {
    fn default() -> Self {
        Self {
            deferred: None,
            awaiting: 0,
        }
    }
}

impl<S> InstallState<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an offer is captured and unconsumed.
    pub fn has_signal(&self) -> bool {
        self.deferred.is_some()
    }

    /// Whether a prompt is waiting for the user's answer.
    pub fn is_awaiting_choice(&self) -> bool {
        self.awaiting > 0
    }

    /// Capture a new offer, replacing any unconsumed one, and reveal the
    /// install buttons.
    pub fn capture<P>(&mut self, page: &mut P, registry: &ElementRegistry<P::Element>, signal: S)
    where
        P: PageBackend<InstallSignal = S>,
    {
        if self.deferred.replace(signal).is_some() {
            log::debug!("Replacing unconsumed install offer");
        }
        set_buttons(page, registry, Display::Flex);
        log::info!("Install offer captured");
    }

    /// Handle an install-button activation.
    pub fn request<P>(&mut self, page: &mut P, unavailable_text: &str) -> InstallRequest<S>
    where
        P: PageBackend<InstallSignal = S>,
    {
        match self.deferred.take() {
            Some(signal) => {
                self.awaiting += 1;
                InstallRequest::Prompt(signal)
            },
            None => {
                log::info!("Install requested with no pending offer");
                page.alert(unavailable_text);
                InstallRequest::Unavailable
            },
        }
    }

    /// Apply the user's answer to a prompt shown earlier.
    pub fn finish<P>(
        &mut self,
        page: &mut P,
        registry: &ElementRegistry<P::Element>,
        outcome: InstallOutcome,
    ) where
        P: PageBackend<InstallSignal = S>,
    {
        log::info!("User response to the install prompt: {outcome}");
        if self.awaiting == 0 {
            log::warn!("Install choice arrived with no prompt outstanding");
        }
        self.awaiting = self.awaiting.saturating_sub(1);
        if outcome == InstallOutcome::Accepted {
            set_buttons(page, registry, Display::None);
        }
    }

    /// Hide the install buttons when already running as an installed app.
    /// Returns `true` if standalone mode was detected.
    pub fn hide_if_standalone<P>(
        &self,
        page: &mut P,
        registry: &ElementRegistry<P::Element>,
    ) -> bool
    where
        P: PageBackend<InstallSignal = S>,
    {
        if !page.is_standalone() {
            return false;
        }
        log::info!("Running standalone; hiding install buttons");
        set_buttons(page, registry, Display::None);
        true
    }
}

fn set_buttons<P: PageBackend>(
    page: &mut P,
    registry: &ElementRegistry<P::Element>,
    display: Display,
) {
    for button in &registry.install_buttons {
        page.set_display(button, display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::test_utils::FakePage;

    const NOTICE: &str = "The app can't be installed right now.";

    fn setup() -> (FakePage, ElementRegistry<usize>, InstallState<u32>) {
        let page = FakePage::dashboard(3);
        let config = DashboardConfig::default();
        let reg = ElementRegistry::resolve(&page, &config.elements).unwrap();
        (page, reg, InstallState::new())
    }

    fn buttons(page: &FakePage) -> Vec<Display> {
        page.install_buttons()
            .iter()
            .map(|&b| page.display_of(b))
            .collect()
    }

    #[test]
    fn capture_reveals_buttons() {
        let (mut page, reg, mut st) = setup();
        st.capture(&mut page, &reg, 1);
        assert!(st.has_signal());
        assert_eq!(buttons(&page), [Display::Flex, Display::Flex]);
    }

    #[test]
    fn accepted_hides_buttons_and_clears_signal() {
        let (mut page, reg, mut st) = setup();
        st.capture(&mut page, &reg, 1);
        assert_eq!(st.request(&mut page, NOTICE), InstallRequest::Prompt(1));
        assert!(!st.has_signal());
        assert!(st.is_awaiting_choice());
        st.finish(&mut page, &reg, InstallOutcome::Accepted);
        assert!(!st.is_awaiting_choice());
        assert_eq!(buttons(&page), [Display::None, Display::None]);
    }

    #[test]
    fn dismissed_keeps_buttons_and_clears_signal() {
        let (mut page, reg, mut st) = setup();
        st.capture(&mut page, &reg, 1);
        st.request(&mut page, NOTICE);
        st.finish(&mut page, &reg, InstallOutcome::Dismissed);
        assert!(!st.has_signal());
        assert_eq!(buttons(&page), [Display::Flex, Display::Flex]);
        // The consumed signal cannot be reused.
        assert_eq!(st.request(&mut page, NOTICE), InstallRequest::Unavailable);
    }

    #[test]
    fn no_signal_alerts_without_visibility_change() {
        let (mut page, _reg, mut st) = setup();
        let before = buttons(&page);
        assert_eq!(st.request(&mut page, NOTICE), InstallRequest::Unavailable);
        assert_eq!(page.alerts, [NOTICE]);
        assert_eq!(buttons(&page), before);
        assert!(!st.is_awaiting_choice());
    }

    #[test]
    fn newer_signal_overwrites_older() {
        let (mut page, reg, mut st) = setup();
        st.capture(&mut page, &reg, 1);
        st.capture(&mut page, &reg, 2);
        assert_eq!(st.request(&mut page, NOTICE), InstallRequest::Prompt(2));
        assert_eq!(st.request(&mut page, NOTICE), InstallRequest::Unavailable);
    }

    #[test]
    fn signal_captured_while_awaiting_survives_choice() {
        let (mut page, reg, mut st) = setup();
        st.capture(&mut page, &reg, 1);
        st.request(&mut page, NOTICE);
        st.capture(&mut page, &reg, 2);
        st.finish(&mut page, &reg, InstallOutcome::Dismissed);
        assert!(st.has_signal());
    }

    #[test]
    fn standalone_hides_buttons_without_signal() {
        let (mut page, reg, st) = setup();
        page.standalone = true;
        assert!(st.hide_if_standalone(&mut page, &reg));
        assert_eq!(buttons(&page), [Display::None, Display::None]);
    }

    #[test]
    fn browser_tab_leaves_buttons() {
        let (mut page, reg, st) = setup();
        assert!(!st.hide_if_standalone(&mut page, &reg));
        assert_eq!(buttons(&page), [Display::Default, Display::Default]);
    }
}
