//! Static substitution and classification tables.
//!
//! All substitution tables are ordered slices rather than maps: several
//! patterns overlap, so iteration order is load-bearing. `cid:149` must be
//! tried before its substring `cid:14`, and `sin p` must be rewritten before
//! the bare ` p ` rule fires inside it.

use crate::model::Difficulty;

/// Literal token fixes for corrupted math notation, applied before the glyph
/// substitutions. Covers misrecognized trig/log names, bare `p` standing in
/// for pi, mangled comparison glyphs, LaTeX command prefixes that lost their
/// backslash, and PDF `cid:` glyph-id leaks.
pub(crate) const NOTATION_FIXES: &[(&str, &str)] = &[
    // Integral fragments
    ("\\int \\$1", "\\int_0^1"),
    ("\\int \\$", "\\int_"),
    // Trig and log names clipped by extraction
    ("sin p", "\\sin \\pi"),
    ("cos p", "\\cos \\pi"),
    ("tan p", "\\tan \\pi"),
    ("si p", "\\sin \\pi"),
    ("co p", "\\cos \\pi"),
    ("lo ", "\\log "),
    ("ln ", "\\ln "),
    // Bare p standing in for pi
    (" p ", " \\pi "),
    (" p$", " \\pi"),
    ("$p", "\\pi"),
    ("p$", "\\pi"),
    ("p)", "\\pi)"),
    ("(p", "(\\pi"),
    // LaTeX command prefixes missing their backslash
    ("frac{", "\\frac{"),
    ("sqrt{", "\\sqrt{"),
    ("sum_{", "\\sum_{"),
    ("prod_{", "\\prod_{"),
    ("lim_{", "\\lim_{"),
    // Mangled comparison operators
    (" £ ", " \\leq "),
    (" ³ ", " \\geq "),
    (" ¢ ", " \\neq "),
    ("£", "\\leq"),
    ("³", "\\geq"),
    ("¢", "\\neq"),
    // Common corrupted expressions
    ("Æ\\mathbb{R}", "\\to \\mathbb{R}"),
    ("ı", "i"),
    // PDF glyph-id artifacts; cid:149 before its substring cid:14
    ("cid:11", ""),
    ("cid:12", ""),
    ("cid:32", " = "),
    ("cid:94", ""),
    ("cid:96", ""),
    ("cid:135", ""),
    ("cid:149", "\\geq"),
    ("cid:144", ""),
    ("cid:199", ""),
    ("cid:14", "+"),
];

/// Corrupted-glyph to LaTeX substitutions.
pub(crate) const SYMBOL_REPLACEMENTS: &[(&str, &str)] = &[
    // Integral and summation symbols
    ("Ú", "\\int"),
    ("Â", "\\sum"),
    ("∏", "\\prod"),
    // Greek letters
    ("π", "\\pi"),
    ("α", "\\alpha"),
    ("β", "\\beta"),
    ("γ", "\\gamma"),
    ("δ", "\\delta"),
    ("ε", "\\varepsilon"),
    ("θ", "\\theta"),
    ("λ", "\\lambda"),
    ("μ", "\\mu"),
    ("σ", "\\sigma"),
    ("φ", "\\phi"),
    ("ω", "\\omega"),
    // Comparison operators
    ("≥", "\\geq"),
    ("≤", "\\leq"),
    ("≠", "\\neq"),
    ("≈", "\\approx"),
    ("≡", "\\equiv"),
    ("∼", "\\sim"),
    // Set theory symbols
    ("∈", "\\in"),
    ("∉", "\\notin"),
    ("⊂", "\\subset"),
    ("⊆", "\\subseteq"),
    ("∪", "\\cup"),
    ("∩", "\\cap"),
    ("∅", "\\emptyset"),
    // Special sets
    ("˜", "\\mathbb{R}"),
    ("È", "\\cup"),
    ("Ç", "\\cap"),
    ("Ã", "\\subset"),
    ("Œ", "\\in"),
    // Other mathematical symbols
    ("•", "\\infty"),
    ("¤", "\\times"),
    ("æ", "\\sqrt"),
    ("±", "\\pm"),
    ("∓", "\\mp"),
    ("∇", "\\nabla"),
    ("∂", "\\partial"),
    // Arrows
    ("→", "\\rightarrow"),
    ("←", "\\leftarrow"),
    ("↔", "\\leftrightarrow"),
    ("⇒", "\\Rightarrow"),
    ("⇐", "\\Leftarrow"),
    ("⇔", "\\Leftrightarrow"),
];

/// Boilerplate patterns removed from extracted text. Compiled
/// case-insensitive and multiline.
pub(crate) const ARTIFACT_PATTERNS: &[&str] = &[
    r"GRE.*?Practice.*?Book.*?Page.*?\d+",
    r"\d+\s*Page.*?$",
    r"Practice Book",
    r"Mathematics Test",
    r"Educational Testing Service",
    r"Copyright.*?\d{4}",
    r"\$\d+_\$\d+",
    r"Unauthorized copying or reuse of.*?$",
    r"any part of this page is illegal.*?$",
    r"GO ON TO THE NEXT PAGE.*?$",
    r"GRE.*?Page.*?\d+",
    r"Choices:\s*Choices:",
];

/// Stray accented characters produced by lossy PDF extraction, removed
/// outright. Some of these shadow entries in [`SYMBOL_REPLACEMENTS`]; the
/// strip runs first, which matches the observed behavior of the source data.
pub(crate) const UNICODE_ARTIFACTS: &[char] = &[
    'Ê', 'Á', 'ˆ', 'Ô', 'Õ', 'Ö', '×', 'Ø', 'Ù', 'Ú', 'Û', 'Ü', 'Ý', 'Þ',
    'ß', 'à', 'á', 'â', 'ã', 'ä', 'å', 'æ', 'ç', 'è', 'é', 'ê', 'ë', 'ì',
    'í', 'î', 'ï', 'ð', 'ñ', 'ò', 'ó', 'ô', 'õ', 'ö', '÷', 'ø', 'ù', 'ú',
    'û', 'ü', 'ý', 'þ', 'ÿ',
];

/// Word-plus-delimiter adjacency fixes applied around `$` markers.
pub(crate) const SPACING_FIXES: &[(&str, &str)] = &[
    ("Let$", "Let $"),
    ("$denote", "$ denote"),
    ("$and$", "$ and $"),
    ("$be", "$ be"),
    ("$satisfies", "$ satisfies"),
    ("$for$", "$ for $"),
    ("$is", "$ is"),
    ("$are", "$ are"),
    ("then$", "then $"),
    ("will$", "will $"),
    ("on$", "on $"),
    ("to$", "to $"),
];

/// Category keyword sets, tested in order; the first set with a matching
/// keyword wins.
pub(crate) const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Complex Analysis",
        &[
            "complex", "analytic", "residue", "contour", "holomorphic",
            "meromorphic", "cauchy", "laurent", "pole", "singularity",
        ],
    ),
    (
        "Real Analysis",
        &[
            "sequence", "series", "convergence", "uniform", "pointwise",
            "monotone", "bounded", "supremum", "infimum", "riemann",
        ],
    ),
    (
        "Abstract Algebra",
        &[
            "group", "ring", "field", "permutation", "conjugacy", "homomorphism",
            "isomorphism", "subgroup", "coset", "quotient", "galois",
        ],
    ),
    (
        "Linear Algebra",
        &[
            "matrix", "vector", "linear", "eigenvalue", "determinant", "span",
            "basis", "dimension", "null space", "rank", "orthogonal",
        ],
    ),
    (
        "Number Theory",
        &[
            "prime", "modulo", "integer", "gcd", "congruent", "divisible",
            "fibonacci", "fermat", "euclidean", "diophantine",
        ],
    ),
    (
        "Topology",
        &[
            "topology", "metric", "space", "open", "closed", "compact",
            "connected", "homeomorphism", "continuous", "hausdorff",
        ],
    ),
    (
        "Graph Theory",
        &[
            "graph", "vertex", "edge", "tree", "cycle", "path",
            "connected", "planar", "chromatic", "spanning",
        ],
    ),
    (
        "Probability",
        &[
            "probability", "random", "sample", "distribution", "expected",
            "variance", "normal", "binomial", "poisson", "bayes",
        ],
    ),
    (
        "Statistics",
        &[
            "sample", "population", "hypothesis", "test", "confidence",
            "correlation", "regression", "anova", "chi-square",
        ],
    ),
    (
        "Calculus",
        &[
            "integral", "derivative", "limit", "continuity", "differential",
            "partial", "gradient", "divergence", "curl", "laplacian",
        ],
    ),
    (
        "Differential Equations",
        &[
            "differential equation", "ode", "pde", "laplace", "fourier",
            "initial value", "boundary value", "separable",
        ],
    ),
    (
        "Geometry",
        &[
            "triangle", "circle", "angle", "area", "volume", "radius",
            "polygon", "sphere", "cylinder", "cone", "ellipse",
        ],
    ),
    (
        "Functions",
        &[
            "function", "domain", "range", "composition", "inverse",
            "bijective", "injective", "surjective", "mapping",
        ],
    ),
    (
        "Discrete Mathematics",
        &[
            "combinatorics", "permutation", "combination", "recursive",
            "recurrence", "generating function", "inclusion-exclusion",
        ],
    ),
];

/// Difficulty indicator sets, tested in order Hard, Medium, Easy; the first
/// matching set overrides the numeric-range base level.
pub(crate) const COMPLEXITY_INDICATORS: &[(Difficulty, &[&str])] = &[
    (
        Difficulty::Hard,
        &[
            "theorem", "proof", "if and only if", "necessary and sufficient",
            "topology", "abstract", "homomorphism", "isomorphism",
            "measure theory", "lebesgue", "functional analysis",
        ],
    ),
    (
        Difficulty::Medium,
        &[
            "derivative", "integral", "matrix", "vector", "convergence",
            "continuous", "differentiable", "optimization", "eigenvalue",
        ],
    ),
    (
        Difficulty::Easy,
        &[
            "compute", "calculate", "find", "what is", "evaluate",
            "solve", "determine", "basic", "simple",
        ],
    ),
];

/// Inclusive problem-number ranges for the base difficulty.
pub(crate) const DIFFICULTY_RANGES: &[(u32, u32, Difficulty)] = &[
    (1, 20, Difficulty::Easy),
    (21, 45, Difficulty::Medium),
    (46, 100, Difficulty::Hard),
];

/// Default category when no keyword set matches.
pub(crate) const DEFAULT_CATEGORY: &str = "Mathematics";

/// The full substitution and classification configuration, constructed once
/// at startup and handed to each component. Cloning is cheap: every field is
/// a reference into static data.
///
/// The default instance wires the static tables above; callers with unusual
/// source material can swap in their own slices.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Literal token fixes (repair step 3)
    pub notation_fixes: &'static [(&'static str, &'static str)],

    /// Glyph-to-LaTeX substitutions (repair step 4)
    pub symbol_replacements: &'static [(&'static str, &'static str)],

    /// Boilerplate removal patterns (repair step 1)
    pub artifact_patterns: &'static [&'static str],

    /// Stray characters stripped outright (repair step 2)
    pub unicode_artifacts: &'static [char],

    /// Delimiter adjacency fixes (repair step 6)
    pub spacing_fixes: &'static [(&'static str, &'static str)],

    /// Ordered category keyword sets
    pub category_keywords: &'static [(&'static str, &'static [&'static str])],

    /// Ordered difficulty indicator sets
    pub complexity_indicators: &'static [(Difficulty, &'static [&'static str])],

    /// Inclusive numeric ranges for the base difficulty
    pub difficulty_ranges: &'static [(u32, u32, Difficulty)],

    /// Fallback category tag
    pub default_category: &'static str,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            notation_fixes: NOTATION_FIXES,
            symbol_replacements: SYMBOL_REPLACEMENTS,
            artifact_patterns: ARTIFACT_PATTERNS,
            unicode_artifacts: UNICODE_ARTIFACTS,
            spacing_fixes: SPACING_FIXES,
            category_keywords: CATEGORY_KEYWORDS,
            complexity_indicators: COMPLEXITY_INDICATORS,
            difficulty_ranges: DIFFICULTY_RANGES,
            default_category: DEFAULT_CATEGORY,
        }
    }
}
