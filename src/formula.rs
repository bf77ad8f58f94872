/// 공식 식별자. 스칼라 평가기와 곡선 생성기가 같은 열거형으로 분기하므로
/// 한쪽에만 구현이 빠지면 컴파일 시점에 드러난다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaId {
    Bandwidth,
    Shannon,
    NoisePower,
    NoiseVoltage,
    NoiseFactor,
    NoiseFigure,
}

impl FormulaId {
    /// 카탈로그 표시 순서. 원본 교재의 1~6번 순서를 따른다.
    pub const ALL: [FormulaId; 6] = [
        FormulaId::Bandwidth,
        FormulaId::Shannon,
        FormulaId::NoisePower,
        FormulaId::NoiseVoltage,
        FormulaId::NoiseFactor,
        FormulaId::NoiseFigure,
    ];

    /// 전역적으로 유일하고 변하지 않는 문자열 키.
    pub fn key(&self) -> &'static str {
        match self {
            FormulaId::Bandwidth => "bandwidth",
            FormulaId::Shannon => "shannon",
            FormulaId::NoisePower => "noise_power",
            FormulaId::NoiseVoltage => "noise_voltage",
            FormulaId::NoiseFactor => "noise_factor",
            FormulaId::NoiseFigure => "noise_figure",
        }
    }

    /// 문자열 키를 식별자로 되돌린다.
    pub fn from_key(key: &str) -> Option<FormulaId> {
        FormulaId::ALL.iter().copied().find(|id| id.key() == key)
    }

    /// 계산 결과의 SI 단위 표기.
    pub fn result_unit(&self) -> &'static str {
        match self {
            FormulaId::Bandwidth => "Hz",
            FormulaId::Shannon => "bits/s",
            FormulaId::NoisePower => "W",
            FormulaId::NoiseVoltage => "V",
            FormulaId::NoiseFactor => "adim",
            FormulaId::NoiseFigure => "dB",
        }
    }
}

/// 공식 입력 필드 한 개의 사양. 필드 순서가 입력 행 순서를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
}

/// 공식 메타데이터. 카탈로그에서 한 번 만들어진 뒤 변경되지 않는다.
#[derive(Debug, Clone)]
pub struct Formula {
    pub id: FormulaId,
    pub title: &'static str,
    pub desc: &'static str,
    pub explain: &'static str,
    pub fields: &'static [FieldSpec],
}

/// 등록 시점 검증 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// 문자열 키가 중복된 경우
    DuplicateId(&'static str),
    /// 필드가 하나도 없는 공식
    EmptyFields(&'static str),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateId(key) => write!(f, "공식 키가 중복됨: {key}"),
            RegistryError::EmptyFields(key) => write!(f, "입력 필드가 없는 공식: {key}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// 공식 카탈로그. 시작 시 한 번 생성되어 읽기 전용으로 사용된다.
#[derive(Debug, Clone)]
pub struct FormulaRegistry {
    formulas: Vec<Formula>,
}

const BANDWIDTH_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "Fmax", label: "Maximum frequency", unit: "Hz" },
    FieldSpec { name: "Fmin", label: "Minimum frequency", unit: "Hz" },
];

const SHANNON_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "B", label: "Bandwidth", unit: "Hz" },
    FieldSpec { name: "SNR", label: "Signal-to-noise ratio (linear)", unit: "adim" },
];

const NOISE_POWER_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "T", label: "Temperature", unit: "K" },
    FieldSpec { name: "B", label: "Bandwidth", unit: "Hz" },
];

const NOISE_VOLTAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "R", label: "Resistance", unit: "Ω" },
    FieldSpec { name: "T", label: "Temperature", unit: "K" },
    FieldSpec { name: "B", label: "Bandwidth", unit: "Hz" },
];

const NOISE_FACTOR_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "NF", label: "Noise figure", unit: "dB" },
];

const NOISE_FIGURE_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "F", label: "Noise factor", unit: "adim" },
];

impl FormulaRegistry {
    /// 내장 공식 카탈로그를 생성한다. 키 중복과 빈 필드 목록을 등록 시점에
    /// 검증하므로 통과한 레지스트리는 이후 조회가 항상 일관된다.
    pub fn standard() -> Result<Self, RegistryError> {
        let formulas = vec![
            Formula {
                id: FormulaId::Bandwidth,
                title: "1. Bandwidth",
                desc: "B = Fmax − Fmin",
                explain: "Range of frequencies occupied by a signal.",
                fields: BANDWIDTH_FIELDS,
            },
            Formula {
                id: FormulaId::Shannon,
                title: "2. Shannon limit",
                desc: "C = B · log₂(1 + SNR)",
                explain: "Theoretical maximum capacity of a channel in bits/s.",
                fields: SHANNON_FIELDS,
            },
            Formula {
                id: FormulaId::NoisePower,
                title: "3. Thermal noise power",
                desc: "N = k · T · B",
                explain: "Noise power generated by thermal agitation.",
                fields: NOISE_POWER_FIELDS,
            },
            Formula {
                id: FormulaId::NoiseVoltage,
                title: "4. Thermal noise voltage",
                desc: "Vn = √(4 · k · R · T · B)",
                explain: "Equivalent thermal-noise voltage across a resistance.",
                fields: NOISE_VOLTAGE_FIELDS,
            },
            Formula {
                id: FormulaId::NoiseFactor,
                title: "5. Noise factor",
                desc: "F = 10^(NF / 10)",
                explain: "Linear noise factor recovered from a noise figure in dB.",
                fields: NOISE_FACTOR_FIELDS,
            },
            Formula {
                id: FormulaId::NoiseFigure,
                title: "6. Noise figure",
                desc: "NF(dB) = 10 · log₁₀(F)",
                explain: "Noise factor expressed in decibels.",
                fields: NOISE_FIGURE_FIELDS,
            },
        ];
        Self::validated(formulas)
    }

    fn validated(formulas: Vec<Formula>) -> Result<Self, RegistryError> {
        for (i, formula) in formulas.iter().enumerate() {
            if formula.fields.is_empty() {
                return Err(RegistryError::EmptyFields(formula.id.key()));
            }
            if formulas[..i].iter().any(|other| other.id.key() == formula.id.key()) {
                return Err(RegistryError::DuplicateId(formula.id.key()));
            }
        }
        Ok(Self { formulas })
    }

    /// 표시 순서 그대로의 공식 목록.
    pub fn list(&self) -> &[Formula] {
        &self.formulas
    }

    /// 식별자로 공식을 찾는다.
    pub fn get(&self, id: FormulaId) -> Option<&Formula> {
        self.formulas.iter().find(|f| f.id == id)
    }

    /// 문자열 키로 공식을 찾는다.
    pub fn get_by_key(&self, key: &str) -> Option<&Formula> {
        self.formulas.iter().find(|f| f.id.key() == key)
    }
}
