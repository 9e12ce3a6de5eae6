use std::future::Future;

use crate::http::request::Request;
use crate::http::response::Response;

/// Application code invoked once per successfully parsed request.
///
/// The handler fills in the response; it has no error channel back to the
/// connection, so failures must be turned into a response (e.g. a `500`).
/// Any body bytes it leaves unread are discarded before the next request on
/// the same connection is parsed.
///
/// ```ignore
/// struct Hello;
///
/// impl Handler for Hello {
///     async fn serve(&self, res: &mut Response, _req: &mut Request<'_>) {
///         res.write_bytes("hello");
///     }
/// }
/// ```
pub trait Handler: Send + Sync + 'static {
    fn serve(
        &self,
        res: &mut Response,
        req: &mut Request<'_>,
    ) -> impl Future<Output = ()> + Send;
}
