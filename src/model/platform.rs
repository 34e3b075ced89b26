//! JavaScript platform identification (engine + runtime).
//!
//! A report may name the runtime that produced it. The runtime decides
//! which engine dialect the text dump is written in.

use crate::utils::config::{ENGINE_V8, RUNTIME_NODEJS};
use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// JavaScript engine that formatted the stack trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsEngine {
    V8,
}

impl JsEngine {
    pub fn name(&self) -> &'static str {
        match self {
            JsEngine::V8 => ENGINE_V8,
        }
    }
}

impl fmt::Display for JsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JsEngine {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ENGINE_V8 => Ok(JsEngine::V8),
            other => Err(ParseError::UnknownPlatform(format!(
                "Unknown JavaScript engine '{}'",
                other
            ))),
        }
    }
}

/// Runtime hosting the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsRuntime {
    NodeJs,
}

impl JsRuntime {
    pub fn name(&self) -> &'static str {
        match self {
            JsRuntime::NodeJs => RUNTIME_NODEJS,
        }
    }

    /// Engine embedded by this runtime
    pub fn engine(&self) -> JsEngine {
        match self {
            JsRuntime::NodeJs => JsEngine::V8,
        }
    }
}

impl fmt::Display for JsRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JsRuntime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RUNTIME_NODEJS => Ok(JsRuntime::NodeJs),
            other => Err(ParseError::UnknownPlatform(format!(
                "Unknown JavaScript runtime '{}'",
                other
            ))),
        }
    }
}

/// Engine/runtime pair attached to a stacktrace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PlatformRecord", into = "PlatformRecord")]
pub struct JsPlatform {
    pub engine: JsEngine,
    pub runtime: JsRuntime,
}

impl JsPlatform {
    pub fn new(engine: JsEngine, runtime: JsRuntime) -> Self {
        Self { engine, runtime }
    }

    /// Resolve a platform from the runtime name reported by the crash
    ///
    /// **Public** - entry point for reporters that only know the runtime
    ///
    /// # Arguments
    /// * `runtime_name` - e.g. "Node.js"
    /// * `runtime_version` - only used in error messages
    ///
    /// # Errors
    /// * `ParseError::UnknownPlatform` - the runtime is not known
    pub fn from_runtime(
        runtime_name: &str,
        runtime_version: Option<&str>,
    ) -> Result<Self, ParseError> {
        let runtime: JsRuntime = runtime_name.parse().map_err(|_| {
            ParseError::UnknownPlatform(format!(
                "No known JavaScript platform with runtime '{}{}{}'",
                runtime_name,
                if runtime_version.is_some() { " " } else { "" },
                runtime_version.unwrap_or("")
            ))
        })?;

        Ok(Self::new(runtime.engine(), runtime))
    }
}

impl Default for JsPlatform {
    fn default() -> Self {
        Self::new(JsEngine::V8, JsRuntime::NodeJs)
    }
}

impl fmt::Display for JsPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.runtime, self.engine)
    }
}

/// Wire form of a platform: `{"engine": "V8", "runtime": "Node.js"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlatformRecord {
    #[serde(default)]
    engine: Option<String>,
    #[serde(default)]
    runtime: Option<String>,
}

impl TryFrom<PlatformRecord> for JsPlatform {
    type Error = ParseError;

    fn try_from(record: PlatformRecord) -> Result<Self, Self::Error> {
        let engine = record
            .engine
            .ok_or_else(|| ParseError::UnknownPlatform("No 'engine' member".to_string()))?
            .parse()?;
        let runtime = record
            .runtime
            .ok_or_else(|| ParseError::UnknownPlatform("No 'runtime' member".to_string()))?
            .parse()?;

        Ok(Self::new(engine, runtime))
    }
}

impl From<JsPlatform> for PlatformRecord {
    fn from(platform: JsPlatform) -> Self {
        Self {
            engine: Some(platform.engine.name().to_string()),
            runtime: Some(platform.runtime.name().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_runtime() {
        let platform = JsPlatform::from_runtime("Node.js", Some("18.2.0")).unwrap();
        assert_eq!(platform.engine, JsEngine::V8);
        assert_eq!(platform.runtime, JsRuntime::NodeJs);
    }

    #[test]
    fn test_from_runtime_unknown() {
        let err = JsPlatform::from_runtime("Deno", Some("1.40")).unwrap_err();
        assert!(err.to_string().contains("'Deno 1.40'"));
    }

    #[test]
    fn test_names_round_trip() {
        assert_eq!("V8".parse::<JsEngine>().unwrap(), JsEngine::V8);
        assert_eq!(JsEngine::V8.to_string(), "V8");
        assert_eq!("Node.js".parse::<JsRuntime>().unwrap(), JsRuntime::NodeJs);
        assert!("SpiderMonkey".parse::<JsEngine>().is_err());
    }

    #[test]
    fn test_platform_json() {
        let json = serde_json::to_string(&JsPlatform::default()).unwrap();
        assert_eq!(json, r#"{"engine":"V8","runtime":"Node.js"}"#);

        let parsed: JsPlatform = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, JsPlatform::default());
    }

    #[test]
    fn test_platform_json_missing_member() {
        let result: Result<JsPlatform, _> = serde_json::from_str(r#"{"engine":"V8"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("No 'runtime' member"));
    }
}
