//! Measurement client
//!
//! Pairs a [`ClientContext`] with a [`Transport`]. Every send validates the
//! hit and the transport ceilings first, so a rejected hit never reaches the
//! network.

use measure_protocol::{
    AppEvent, Event, Exception, Hit, HitType, PageView, ScreenView, Social, ValidationPolicy,
};
use tracing::debug;

use crate::context::{ClientContext, Request};
use crate::endpoint::DEFAULT_CHARSET;
use crate::error::Result;
use crate::transport::{HttpTransport, Transport, TransportConfig};

/// Sends hits for one session
pub struct MeasurementClient<T: Transport = HttpTransport> {
    context: ClientContext,
    transport: T,
    charset: String,
}

impl MeasurementClient<HttpTransport> {
    /// Create a client sending over HTTP
    pub fn with_http(context: ClientContext, config: TransportConfig) -> Result<Self> {
        Ok(Self::new(context, HttpTransport::with_config(config)?))
    }
}

impl<T: Transport> MeasurementClient<T> {
    pub fn new(context: ClientContext, transport: T) -> Self {
        Self {
            context,
            transport,
            charset: DEFAULT_CHARSET.to_string(),
        }
    }

    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ClientContext {
        &mut self.context
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Give back the transport, e.g. to close it
    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Charset advertised on POST bodies (default `utf-8`)
    pub fn set_charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.charset = charset.into();
        self
    }

    /// Send a hit and wait for the response headers
    ///
    /// # Errors
    ///
    /// Payload errors (validation, ceilings) are returned before any I/O.
    /// Network failures come back as `ClientError::Transport`.
    pub fn send_hit(&self, hit: &dyn Hit) -> Result<()> {
        let request = self.context.request(hit)?;
        log_dispatch(Some(hit.hit_type()), &request, false);
        self.transport.send(&request, &self.charset)?;
        Ok(())
    }

    /// Send a hit without waiting
    ///
    /// Payload errors are still returned. What happens on the wire is not
    /// reported.
    pub fn send_hit_async(&self, hit: &dyn Hit) -> Result<()> {
        let request = self.context.request(hit)?;
        log_dispatch(Some(hit.hit_type()), &request, true);
        self.transport.send_async(&request, &self.charset);
        Ok(())
    }

    /// Send a pre-assembled payload, applying the transport ceilings
    pub fn send_payload(&self, payload: &str) -> Result<()> {
        let request = self.context.request_for_payload(payload.to_string())?;
        log_dispatch(None, &request, false);
        self.transport.send(&request, &self.charset)?;
        Ok(())
    }

    pub fn send_payload_async(&self, payload: &str) -> Result<()> {
        let request = self.context.request_for_payload(payload.to_string())?;
        log_dispatch(None, &request, true);
        self.transport.send_async(&request, &self.charset);
        Ok(())
    }

    // =========================================================================
    // Convenience senders
    // =========================================================================

    /// Page view of a full location. An empty title is left out.
    pub fn page_view(&self, location: &str, title: &str) -> Result<()> {
        self.send_hit(&self.build_page_view(location, title)?)
    }

    pub fn page_view_async(&self, location: &str, title: &str) -> Result<()> {
        self.send_hit_async(&self.build_page_view(location, title)?)
    }

    /// Page view identified by host and path
    pub fn page_view_path(&self, host: &str, path: &str, title: &str) -> Result<()> {
        self.send_hit(&self.build_page_view_path(host, path, title)?)
    }

    pub fn page_view_path_async(&self, host: &str, path: &str, title: &str) -> Result<()> {
        self.send_hit_async(&self.build_page_view_path(host, path, title)?)
    }

    pub fn screen_view(&self, screen: &str, app: &str, version: &str) -> Result<()> {
        self.send_hit(&self.build_screen_view(screen, app, version)?)
    }

    pub fn screen_view_async(&self, screen: &str, app: &str, version: &str) -> Result<()> {
        self.send_hit_async(&self.build_screen_view(screen, app, version)?)
    }

    pub fn event(&self, category: &str, action: &str) -> Result<()> {
        self.send_hit(&self.build_event(category, action)?)
    }

    pub fn event_async(&self, category: &str, action: &str) -> Result<()> {
        self.send_hit_async(&self.build_event(category, action)?)
    }

    pub fn app_event(
        &self,
        category: &str,
        action: &str,
        app: &str,
        screen: &str,
        version: &str,
    ) -> Result<()> {
        self.send_hit(&self.build_app_event(category, action, app, screen, version)?)
    }

    pub fn app_event_async(
        &self,
        category: &str,
        action: &str,
        app: &str,
        screen: &str,
        version: &str,
    ) -> Result<()> {
        self.send_hit_async(&self.build_app_event(category, action, app, screen, version)?)
    }

    /// Exception report. `None` leaves fatality unreported.
    pub fn exception(
        &self,
        description: &str,
        app: &str,
        version: &str,
        fatal: Option<bool>,
    ) -> Result<()> {
        self.send_hit(&self.build_exception(description, app, version, fatal)?)
    }

    pub fn exception_async(
        &self,
        description: &str,
        app: &str,
        version: &str,
        fatal: Option<bool>,
    ) -> Result<()> {
        self.send_hit_async(&self.build_exception(description, app, version, fatal)?)
    }

    pub fn social(&self, network: &str, action: &str, target: &str) -> Result<()> {
        self.send_hit(&self.build_social(network, action, target)?)
    }

    pub fn social_async(&self, network: &str, action: &str, target: &str) -> Result<()> {
        self.send_hit_async(&self.build_social(network, action, target)?)
    }

    fn policy(&self) -> ValidationPolicy {
        self.context.policy()
    }

    fn build_page_view(&self, location: &str, title: &str) -> Result<PageView> {
        let mut hit = PageView::with_policy(self.policy());
        hit.set_document_location(location)?
            .set_document_title(title)?;
        Ok(hit)
    }

    fn build_page_view_path(&self, host: &str, path: &str, title: &str) -> Result<PageView> {
        let mut hit = PageView::with_policy(self.policy());
        hit.set_document_host_name(host)?
            .set_document_path(path)?
            .set_document_title(title)?;
        Ok(hit)
    }

    fn build_screen_view(&self, screen: &str, app: &str, version: &str) -> Result<ScreenView> {
        let mut hit = ScreenView::with_policy(self.policy());
        hit.set_screen_name(screen)?
            .set_application_name(app)?
            .set_application_version(version)?;
        Ok(hit)
    }

    fn build_event(&self, category: &str, action: &str) -> Result<Event> {
        let mut hit = Event::with_policy(self.policy());
        hit.set_event_category(category)?.set_event_action(action)?;
        Ok(hit)
    }

    fn build_app_event(
        &self,
        category: &str,
        action: &str,
        app: &str,
        screen: &str,
        version: &str,
    ) -> Result<AppEvent> {
        let mut hit = AppEvent::with_policy(self.policy());
        hit.set_event_category(category)?
            .set_event_action(action)?
            .set_application_name(app)?
            .set_screen_name(screen)?
            .set_application_version(version)?;
        Ok(hit)
    }

    fn build_exception(
        &self,
        description: &str,
        app: &str,
        version: &str,
        fatal: Option<bool>,
    ) -> Result<Exception> {
        let mut hit = Exception::with_policy(self.policy());
        hit.set_exception_description(description)?
            .set_application_name(app)?
            .set_application_version(version)?
            .set_fatal(fatal);
        Ok(hit)
    }

    fn build_social(&self, network: &str, action: &str, target: &str) -> Result<Social> {
        let mut hit = Social::with_policy(self.policy());
        hit.set_social_network(network)?
            .set_social_action(action)?
            .set_social_action_target(target)?;
        Ok(hit)
    }
}

fn log_dispatch(hit_type: Option<HitType>, request: &Request, asynchronous: bool) {
    let len = request.body().map_or(request.url().len(), str::len);
    debug!(
        hit_type = hit_type.map_or("raw", HitType::as_str),
        method = %request.method(),
        url = request.url().split('?').next().unwrap_or_default(),
        len,
        asynchronous,
        "dispatching hit"
    );
}
