use lynx_dns_application::ports::DatagramTransport;
use lynx_dns_application::{CycleOutcome, DnsServer};
use tracing::{debug, error, warn};

/// Drive the server shell one request/response cycle at a time. Only
/// transport failures surface as `Err`; bad datagrams are logged and the
/// loop keeps serving.
pub fn run<T: DatagramTransport>(server: &DnsServer<T>) -> anyhow::Result<()> {
    loop {
        match server.serve_once() {
            Ok(CycleOutcome::Answered {
                questions,
                answers,
                bytes_sent,
            }) => {
                debug!(questions, answers, bytes_sent, "Query answered");
            }
            Ok(CycleOutcome::Rejected { error, replied }) => {
                warn!(error = %error, replied, "Datagram rejected");
            }
            Err(e) => {
                error!(error = %e, "Transport failure, continuing");
            }
        }
    }
}
