//! "마지막으로 발급된 요청이 이긴다" 규칙을 구현하는 요청 세대 카운터.
//!
//! 계산/플롯 요청마다 티켓을 발급하고, 응답을 반영하기 전에 티켓이 여전히
//! 최신인지 확인한다. 늦게 도착한 이전 세대 응답은 폐기된다.

/// 요청 한 건을 식별하는 세대 번호 티켓.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 단조 증가하는 요청 세대 카운터.
#[derive(Debug, Default)]
pub struct RequestCounter {
    issued: u64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 요청 티켓을 발급한다. 이전에 발급된 티켓은 모두 무효가 된다.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// 해당 티켓이 가장 최근 발급본인지 확인한다.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// 최신 티켓의 응답만 통과시키고, 뒤처진 응답은 버린다.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            None
        }
    }
}
