//! Matching options and the domain anchor catalogue.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options for one matching request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchOptions {
    /// Keep only the strongest-K entries of each member category.
    pub top_k: Option<usize>,
    /// Category emphasis applied during text composition.
    pub weights: CategoryWeights,
    /// Domain alignment boost stage configuration.
    pub domain_boost: DomainBoostOptions,
    /// Temperature of the display-only softmax in the reports.
    pub softmax_temperature: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            top_k: None,
            weights: CategoryWeights::default(),
            domain_boost: DomainBoostOptions::default(),
            softmax_temperature: 0.6,
        }
    }
}

/// How strongly each member category counts toward the composed profile.
///
/// A weight of `w` repeats the category sentence `round(w)` times (minimum
/// once) in the text sent for embedding. Repetition is the only weighting
/// lever available when the embedding call accepts a single string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CategoryWeights {
    /// Skill terms weight.
    pub skills: f64,
    /// Programming languages weight.
    pub languages: f64,
    /// Keywords weight.
    pub keywords: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            skills: 2.0,
            languages: 2.0,
            keywords: 1.0,
        }
    }
}

impl CategoryWeights {
    /// Repetition count for a weight: `round(w)`, at least 1.
    #[must_use]
    pub fn repetitions(weight: f64) -> usize {
        let rounded = weight.round();
        if rounded < 1.0 { 1 } else { rounded as usize }
    }
}

/// Domain alignment boost configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DomainBoostOptions {
    /// Whether the stage runs at all.
    pub enabled: bool,
    /// Maximum boost/penalty in `[0, 1]`; `0` disables the stage.
    pub strength: f64,
    /// Override of the built-in anchor catalogue.
    pub anchors: Option<Vec<DomainAnchor>>,
    /// Softmax temperature for the domain distributions.
    pub temperature: f64,
    /// Alignment scoring method.
    pub method: AlignmentMethod,
}

impl Default for DomainBoostOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: 0.35,
            anchors: None,
            temperature: 0.7,
            method: AlignmentMethod::Dot,
        }
    }
}

/// Alignment score between two domain distributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMethod {
    /// Dot product of the probability vectors (expected domain overlap).
    #[default]
    Dot,
    /// Cosine similarity between the L2-normalized distributions.
    Cosine,
}

/// A named domain anchor: a broad skill domain with a representative seed
/// text used only to detect domain (mis)match.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DomainAnchor {
    /// Anchor name, e.g. `"frontend"`.
    pub name: String,
    /// Seed phrase embedded once per request.
    pub seed: String,
}

impl DomainAnchor {
    fn new(name: &str, seed: &str) -> Self {
        Self {
            name: name.to_string(),
            seed: seed.to_string(),
        }
    }
}

/// The built-in domain anchor catalogue.
///
/// Broad domains with rich seed phrases; anchors are never matched to the
/// output directly, they only feed the alignment signal.
#[must_use]
pub fn default_domain_anchors() -> Vec<DomainAnchor> {
    vec![
        DomainAnchor::new(
            "frontend",
            "frontend web development; UI; UX; React; Next.js; JavaScript; TypeScript; HTML; CSS; Tailwind; accessibility; design systems",
        ),
        DomainAnchor::new(
            "backend",
            "backend server development; APIs; microservices; databases; PostgreSQL; MySQL; Redis; Node.js; Python; Java; Go; REST; GraphQL; scalability; reliability",
        ),
        DomainAnchor::new(
            "data-ml",
            "data science; machine learning; deep learning; statistics; pandas; numpy; scikit-learn; TensorFlow; PyTorch; data pipelines; feature engineering; MLOps",
        ),
        DomainAnchor::new(
            "devops",
            "DevOps; CI/CD; Docker; Kubernetes; Terraform; Infrastructure as Code; AWS; Azure; GCP; observability; logging; monitoring; SRE",
        ),
        DomainAnchor::new(
            "mobile",
            "mobile development; iOS; Android; Swift; Kotlin; React Native; Flutter; mobile UI; app store; device APIs",
        ),
        DomainAnchor::new(
            "security",
            "cybersecurity; application security; encryption; IAM; vulnerability; pentesting; threat modeling; OWASP; zero trust",
        ),
        DomainAnchor::new(
            "product-design",
            "product management; product discovery; UX research; UI design; interaction design; prototyping; Figma; user testing",
        ),
        DomainAnchor::new(
            "finance",
            "finance; accounting; financial markets; trading; investment banking; quant; derivatives; portfolio; risk management; fintech; payments",
        ),
        DomainAnchor::new(
            "healthcare",
            "healthcare; medical; clinical; EHR; patient care; HIPAA; biomed; pharma; diagnostics; public health",
        ),
        DomainAnchor::new(
            "education",
            "education; edtech; pedagogy; teaching; curriculum; learning science; assessment; LMS",
        ),
    ]
}
