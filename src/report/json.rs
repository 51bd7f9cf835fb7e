//! Structured reporting.

use super::Reporter;
use crate::diff::Difference;
use crate::object::KubeObject;
use crate::value::Value;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Differences recorded per kind, then per name. Each entry is `[path, args...]`.
pub type Report = BTreeMap<String, BTreeMap<String, Vec<Vec<Value>>>>;

/// JsonReporter collects every difference and writes a single JSON document
/// on [`Reporter::finalize`].
///
/// Keys come out sorted, so the document is stable for a given set of inputs.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
    report: Report,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        JsonReporter {
            out,
            report: Report::new(),
        }
    }

    /// Returns what has been collected so far.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn entries(&mut self, obj: &KubeObject) -> &mut Vec<Vec<Value>> {
        self.report
            .entry(obj.kind.clone())
            .or_default()
            .entry(obj.name.clone())
            .or_default()
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn register(&mut self, obj: &KubeObject) -> io::Result<()> {
        self.entries(obj);
        Ok(())
    }

    fn record(&mut self, obj: &KubeObject, difference: &Difference) -> io::Result<()> {
        self.entries(obj).push(difference.to_record());
        Ok(())
    }

    fn finalize(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_twice_keeps_records() {
        let obj = KubeObject::new("default", "Service", "web");
        let mut reporter = JsonReporter::new(Vec::new());

        reporter.register(&obj).unwrap();
        reporter
            .record(&obj, &Difference::missing_item(".spec", "ports"))
            .unwrap();
        reporter.register(&obj).unwrap();

        let report = reporter.report();
        assert_eq!(report.len(), 1);
        assert_eq!(report["Service"].len(), 1);
        assert_eq!(
            report["Service"]["web"],
            vec![vec![Value::from(".spec"), Value::from("ports")]]
        );
    }

    #[test]
    fn test_register_twice_then_record() {
        let obj = KubeObject::new("default", "Service", "web");
        let mut reporter = JsonReporter::new(Vec::new());

        reporter.register(&obj).unwrap();
        reporter.register(&obj).unwrap();
        reporter
            .record(&obj, &Difference::unequal_lengths(".spec.ports", 2, 1))
            .unwrap();

        assert_eq!(reporter.report().len(), 1);
        assert_eq!(reporter.report()["Service"]["web"].len(), 1);
    }

    #[test]
    fn test_nothing_written_before_finalize() {
        let obj = KubeObject::new("default", "Service", "web");
        let mut reporter = JsonReporter::new(Vec::new());
        reporter.register(&obj).unwrap();
        reporter
            .record(&obj, &Difference::missing_item("", "spec"))
            .unwrap();
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn test_finalize_output() {
        let web = KubeObject::new("default", "Service", "web");
        let api = KubeObject::new("default", "Deployment", "api");
        let quiet = KubeObject::new("default", "ConfigMap", "quiet");
        let mut reporter = JsonReporter::new(Vec::new());

        reporter.register(&web).unwrap();
        reporter
            .record(&web, &Difference::not_equal(".spec.port", &Value::Int(80), &Value::Int(81)))
            .unwrap();
        reporter.register(&api).unwrap();
        reporter
            .record(&api, &Difference::broken_cluster("not found"))
            .unwrap();
        reporter.register(&quiet).unwrap();
        reporter.finalize().unwrap();

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        let expected = r#"{
  "ConfigMap": {
    "quiet": []
  },
  "Deployment": {
    "api": [
      [
        null,
        "not found"
      ]
    ]
  },
  "Service": {
    "web": [
      [
        ".spec.port",
        80,
        81
      ]
    ]
  }
}
"#;
        assert_eq!(written, expected);
    }
}
