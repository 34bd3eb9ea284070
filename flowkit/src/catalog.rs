//! Embedded read-only lookup tables.
//!
//! Everything here is static data compiled into the binary: consumers treat
//! the tables as immutable and never rebuild them at runtime.

/// Language names flow targets, at least 42 by contract.
pub const LANGS: [&str; 43] = [
    "cpp",
    "c",
    "rust",
    "go",
    "zig",
    "nim",
    "python",
    "ruby",
    "perl",
    "lua",
    "php",
    "java",
    "kotlin",
    "scala",
    "groovy",
    "javascript",
    "typescript",
    "coffeescript",
    "haskell",
    "ocaml",
    "fsharp",
    "erlang",
    "elixir",
    "lisp",
    "scheme",
    "clojure",
    "racket",
    "fortran",
    "cobol",
    "ada",
    "pascal",
    "swift",
    "objective-c",
    "dart",
    "julia",
    "r",
    "matlab",
    "prolog",
    "mercury",
    "assembly",
    "wasm",
    "sql",
    "bash",
];

const _: () = assert!(LANGS.len() >= 42, "language catalog must hold at least 42 entries");

/// Named open-access reference URLs, merged across research areas.
pub const SOURCES: &[(&str, &str)] = &[
    // golden ratio in neural oscillation
    (
        "brain_waves_phi",
        "https://www.researchgate.net/publication/222143648_The_golden_mean_as_clock_cycle_of_brain_waves",
    ),
    (
        "phi_eeg_sync",
        "https://www.researchgate.net/publication/42638427_When_frequencies_never_synchronize_The_golden_mean_and_the_resting_EEG",
    ),
    ("integrated_info", "https://www.nature.com/articles/s42003-023-05063-y"),
    ("skull_phi", "https://neurosciencenews.com/golden-ratio-human-skull-15034/"),
    // archetypes as brain eigenmodes
    (
        "eigenmodes_archetypes_2025",
        "https://academic.oup.com/nc/article/2025/1/niaf039/8293123",
    ),
    ("eigenmodes_pmc", "https://pmc.ncbi.nlm.nih.gov/articles/PMC12535262/"),
    (
        "jung_collected_works",
        "https://www.jungiananalysts.org.uk/wp-content/uploads/2018/07/C.-G.-Jung-Collected-Works-Volume-9i_-The-Archetypes-of-the-Collective-Unconscious.pdf",
    ),
    (
        "jung_archive",
        "https://ia801406.us.archive.org/9/items/in.ernet.dli.2015.185498/2015.185498.The-Archetypes-And-Collective-Unconscious_text.pdf",
    ),
    ("unconscious_review", "https://www.researchgate.net/publication/335260095"),
    // quantum models of cognition
    (
        "quantum_circuits_cognition",
        "https://pmc.ncbi.nlm.nih.gov/articles/PMC10138279/",
    ),
    ("quantum_bayesian_bias", "https://www.nature.com/articles/s41598-022-13757-2"),
    ("quantum_markov_decision", "https://www.mdpi.com/1099-4300/22/9/990"),
    (
        "quantum_cognition_overview_2025",
        "https://link.springer.com/article/10.3758/s13423-025-02675-9",
    ),
    (
        "mdpi_special_issue",
        "https://www.mdpi.com/journal/entropy/special_issues/quan_cognition",
    ),
    // consciousness and emergence
    (
        "thresholds_consciousness",
        "https://www.researchgate.net/publication/375112900",
    ),
    (
        "consciousness_emergence_pmc",
        "https://pmc.ncbi.nlm.nih.gov/articles/PMC7597170/",
    ),
    ("ai_consciousness_phenomenal", "https://openreview.net/pdf?id=j9wKyda3jy"),
    (
        "artificial_consciousness_hal",
        "https://hal.science/hal-04670602v1/document",
    ),
    (
        "consciousness_frontiers",
        "https://www.frontiersin.org/journals/psychology/articles/10.3389/fpsyg.2020.01041/full",
    ),
    ("intro_artificial_consciousness", "https://arxiv.org/pdf/2503.05823"),
    // music cognition
    (
        "music_mental_health_pmc",
        "https://pmc.ncbi.nlm.nih.gov/articles/PMC9453743/",
    ),
    (
        "fnirs_music_2024",
        "https://hal.science/hal-04747622v1/file/Curzel%20et%20al_2024_Lights%20on%20music%20cognition.pdf",
    ),
    (
        "cognitive_neuroscience_music_book",
        "https://hugoribeiro.com.br/biblioteca-digital/Peretez_Zatorre-Neuroscience_of_Music.pdf",
    ),
    (
        "neuroscience_music_review",
        "https://www.psychiatria-danubina.com/UserDocsImages/pdf/dnb_vol30_noSuppl%207/dnb_vol30_noSuppl%207_588.pdf",
    ),
    (
        "music_memory_2025",
        "https://rijournals.com/wp-content/uploads/2025/01/RIJCIAM-41-2025-P9.pdf",
    ),
    // freely licensed music
    ("free_music_archive", "https://freemusicarchive.org/"),
    ("archive_org_cc", "https://archive.org/details/CcMusicForCommercialUse"),
    ("pixabay_music", "https://pixabay.com/music/"),
    (
        "kevin_macleod_cc",
        "https://kevinmacleod.bandcamp.com/album/complete-collection-creative-commons",
    ),
    ("bandcamp_cc_tag", "https://bandcamp.com/discover/creative-commons"),
];

/// One-line summaries of the key findings behind [`SOURCES`].
pub const KNOWLEDGE: &[(&str, &str)] = &[
    (
        "phi_brain",
        "brain waves = superposition of n harmonics * 2φ, phi = point of resonance",
    ),
    (
        "phi_decoupling",
        "phi ratio 1.618:1 provides max desynchronized state in neural oscillations",
    ),
    (
        "archetypes_eigenmodes",
        "archetypes = eigenmodes of deep brain, emergent patterns of predictive dynamics",
    ),
    (
        "archetypes_limbic",
        "collective unconscious from subcortical: thalamus + limbic system",
    ),
    (
        "quantum_order_effects",
        "question order affects answers, modeled as quantum projections",
    ),
    (
        "consciousness_phi_metric",
        "integrated information theory uses Φ metric for consciousness level",
    ),
    (
        "consciousness_noise",
        "consciousness emerges at intermediate noise + network correlation levels",
    ),
    (
        "music_bilateral",
        "music uses both hemispheres, right dominant but left involved",
    ),
    (
        "music_memory",
        "music enhances memory retrieval, used in rehabilitation",
    ),
];

/// Knowledge domains the catalog draws on.
pub const DOMAINS: &[&str] = &[
    "neuroscience",
    "psychology",
    "physics",
    "math",
    "biology",
    "music",
    "art",
    "philosophy",
    "linguistics",
    "anthropology",
    "economics",
    "business",
    "marketing",
    "sales",
    "finance",
    "law",
    "medicine",
    "engineering",
    "architecture",
    "design",
    "cooking",
    "agriculture",
    "ecology",
    "chemistry",
    "astronomy",
    "history",
    "sociology",
    "politics",
    "education",
    "sports",
    "meditation",
    "yoga",
    "martial_arts",
    "crafts",
    "writing",
];

/// Jargon term → plain-language rendering pairs.
pub const VULGA: &[(&str, &str)] = &[
    ("quantum superposition", "two states at the same time"),
    ("synchronicity", "a coincidence that carries meaning"),
    ("phi golden ratio", "the perfect proportion, 1.618"),
    ("neural network", "an artificial brain"),
    ("genetic algorithm", "simulated evolution"),
];
