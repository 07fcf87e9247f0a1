use color_cluster::{ColorExtractor, NamingConvention};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Application configuration loaded from the YAML file named by `CONFIG_FILE`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Clustering defaults and limits
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Palette selection and the remote xkcd list
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Image download limits
    #[serde(default)]
    pub images: ImagesConfig,
}

/// Clustering defaults and limits
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractionConfig {
    /// Cluster count when the request does not name one
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Largest cluster count a request may ask for
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Images taller than this are downscaled before clustering
    #[serde(default = "default_max_sample_height")]
    pub max_sample_height: u32,

    /// Very wide images are further downscaled to this width; `null`
    /// keeps the full aspect ratio
    #[serde(default = "default_max_sample_width")]
    pub max_sample_width: Option<u32>,

    /// Standardize channels unless the request says otherwise
    #[serde(default = "default_true")]
    pub normalize: bool,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    #[serde(default = "default_min_iterations")]
    pub min_iterations: usize,

    /// Largest centroid displacement counted as converged
    #[serde(default = "default_tolerance")]
    pub convergence_tolerance: f64,

    /// Extra attempts after a run fails to converge
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
}

fn default_k() -> usize {
    3
}

fn default_max_k() -> usize {
    20
}

fn default_max_sample_height() -> u32 {
    color_cluster::preprocess::DEFAULT_MAX_HEIGHT
}

fn default_max_sample_width() -> Option<u32> {
    Some(1000)
}

fn default_true() -> bool {
    true
}

fn default_max_iterations() -> usize {
    color_cluster::kmeans::DEFAULT_MAX_ITERATIONS
}

fn default_min_iterations() -> usize {
    color_cluster::kmeans::DEFAULT_MIN_ITERATIONS
}

fn default_tolerance() -> f64 {
    color_cluster::kmeans::DEFAULT_TOLERANCE
}

fn default_max_retries() -> usize {
    2
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
            max_sample_height: default_max_sample_height(),
            max_sample_width: default_max_sample_width(),
            normalize: true,
            max_iterations: default_max_iterations(),
            min_iterations: default_min_iterations(),
            convergence_tolerance: default_tolerance(),
            max_retries: default_max_retries(),
        }
    }
}

impl ExtractionConfig {
    /// Build an extractor for one request.
    pub fn extractor(&self, k: usize, normalize: bool) -> ColorExtractor {
        let extractor = ColorExtractor::new(k)
            .normalize(normalize)
            .max_iterations(self.max_iterations)
            .min_iterations(self.min_iterations)
            .tolerance(self.convergence_tolerance)
            .max_height(self.max_sample_height);

        match self.max_sample_width {
            Some(width) => extractor.max_width(width),
            None => extractor,
        }
    }
}

/// Palette selection and the remote xkcd list
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    /// Naming convention when the request does not name one
    #[serde(
        default = "default_convention",
        deserialize_with = "deserialize_convention"
    )]
    pub default_convention: NamingConvention,

    /// Where the xkcd `rgb.txt` list is fetched from
    #[serde(default = "default_xkcd_url")]
    pub xkcd_url: String,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_convention() -> NamingConvention {
    NamingConvention::Xkcd
}

fn default_xkcd_url() -> String {
    "https://xkcd.com/color/rgb.txt".to_string()
}

fn default_fetch_timeout() -> u64 {
    30
}

fn deserialize_convention<'de, D>(deserializer: D) -> Result<NamingConvention, D::Error>
where
    D: Deserializer<'de>,
{
    let selector = String::deserialize(deserializer)?;
    selector.parse().map_err(serde::de::Error::custom)
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_convention: default_convention(),
            xkcd_url: default_xkcd_url(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

/// Image download limits
#[derive(Debug, Deserialize, Clone)]
pub struct ImagesConfig {
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Largest accepted image, in bytes (downloads and request bodies)
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    20 * 1024 * 1024
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_FILE`, if set
    pub fn from_env() -> Self {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => {
                tracing::info!("CONFIG_FILE not set, using default configuration");
                Self::default()
            }
        }
    }

    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        default_k = config.extraction.default_k,
                        max_k = config.extraction.max_k,
                        default_convention = %config.palette.default_convention,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
