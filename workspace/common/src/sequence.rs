/// Orders overlapping `/predict` round trips so that only the most recently
/// issued one may update the page.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequencer {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        tracing::trace!("Issued request ticket {}", self.latest);
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        let current = ticket.0 == self.latest;
        if !current {
            tracing::debug!(
                "Dropping stale response for ticket {} (latest is {})",
                ticket.0,
                self.latest
            );
        }
        current
    }
}
