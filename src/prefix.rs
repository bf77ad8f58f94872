/// SI 접두어 한 항목. 기호, 배율, 표시용 라벨을 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixEntry {
    pub symbol: &'static str,
    pub factor: f64,
    pub label: &'static str,
}

/// SI 접두어 표. 시작 시 한 번 생성되어 읽기 전용으로 사용된다.
///
/// 항목 순서가 UI 표시 순서이며, 단위 접두어("") 뒤에는 배율 내림차순으로
/// 배치한다. `scale_for_display`가 이 순서에 의존한다.
#[derive(Debug, Clone)]
pub struct PrefixTable {
    entries: Vec<PrefixEntry>,
}

impl PrefixTable {
    /// 표준 십진 접두어 표(Y ~ y)를 생성한다. factor == 1 항목은 기본 접두어
    /// 역할을 하는 "" 하나뿐이다.
    pub fn standard() -> Self {
        let entries = vec![
            PrefixEntry { symbol: "", factor: 1.0, label: " (10^0)" },
            PrefixEntry { symbol: "Y", factor: 1e24, label: " (10^24)" },
            PrefixEntry { symbol: "Z", factor: 1e21, label: " (10^21)" },
            PrefixEntry { symbol: "E", factor: 1e18, label: " (10^18)" },
            PrefixEntry { symbol: "P", factor: 1e15, label: " (10^15)" },
            PrefixEntry { symbol: "T", factor: 1e12, label: " (10^12)" },
            PrefixEntry { symbol: "G", factor: 1e9, label: " (10^9)" },
            PrefixEntry { symbol: "M", factor: 1e6, label: " (10^6)" },
            PrefixEntry { symbol: "k", factor: 1e3, label: " (10^3)" },
            PrefixEntry { symbol: "h", factor: 1e2, label: " (10^2)" },
            PrefixEntry { symbol: "da", factor: 1e1, label: " (10^1)" },
            PrefixEntry { symbol: "d", factor: 1e-1, label: " (10^-1)" },
            PrefixEntry { symbol: "c", factor: 1e-2, label: " (10^-2)" },
            PrefixEntry { symbol: "m", factor: 1e-3, label: " (10^-3)" },
            PrefixEntry { symbol: "µ", factor: 1e-6, label: " (10^-6)" },
            PrefixEntry { symbol: "n", factor: 1e-9, label: " (10^-9)" },
            PrefixEntry { symbol: "p", factor: 1e-12, label: " (10^-12)" },
            PrefixEntry { symbol: "f", factor: 1e-15, label: " (10^-15)" },
            PrefixEntry { symbol: "a", factor: 1e-18, label: " (10^-18)" },
            PrefixEntry { symbol: "z", factor: 1e-21, label: " (10^-21)" },
            PrefixEntry { symbol: "y", factor: 1e-24, label: " (10^-24)" },
        ];
        Self { entries }
    }

    /// UI 표시 순서 그대로의 전체 항목.
    pub fn entries(&self) -> &[PrefixEntry] {
        &self.entries
    }

    /// 기호로 접두어를 찾는다. 표에 없는 기호는 부트스트랩 구성 오류이며
    /// 최종 사용자 입력으로는 들어오지 않는다.
    pub fn lookup(&self, symbol: &str) -> Option<&PrefixEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// 크기 + 접두어 기호를 SI 값으로 환산한다.
    pub fn to_si(&self, magnitude: f64, symbol: &str) -> Option<f64> {
        self.lookup(symbol).map(|e| magnitude * e.factor)
    }

    /// 표시용으로 값에 맞는 가장 큰 접두어를 고른다.
    ///
    /// |value| >= factor 를 만족하는 첫 비단위 접두어를 내림차순 목록에서
    /// 찾아 (환산 값, 기호)를 반환한다. 맞는 접두어가 없으면 None.
    pub fn scale_for_display(&self, value: f64) -> Option<(f64, &'static str)> {
        self.entries
            .iter()
            .filter(|e| e.factor != 1.0)
            .find(|e| value.abs() >= e.factor)
            .map(|e| (value / e.factor, e.symbol))
    }
}
