//! Human readable reporting.

use super::Reporter;
use crate::diff::Difference;
use crate::object::KubeObject;
use std::io::{self, Write};

/// TextReporter writes a line per object and per difference immediately.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        TextReporter { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn register(&mut self, obj: &KubeObject) -> io::Result<()> {
        writeln!(self.out, "Checking {} '{}'", obj.kind, obj.name)
    }

    fn record(&mut self, _obj: &KubeObject, difference: &Difference) -> io::Result<()> {
        writeln!(self.out, " *** {}", difference)
    }

    fn finalize(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use pretty_assertions::assert_eq;

    fn output(reporter: TextReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_text_report() {
        let obj = KubeObject::new("default", "Deployment", "web");
        let mut reporter = TextReporter::new(Vec::new());

        reporter.register(&obj).unwrap();
        reporter
            .record(&obj, &Difference::not_equal(".spec.replicas", &Value::Int(3), &Value::Int(2)))
            .unwrap();
        reporter
            .record(&obj, &Difference::missing_item(".metadata", "labels"))
            .unwrap();
        reporter.finalize().unwrap();

        assert_eq!(
            output(reporter),
            "Checking Deployment 'web'\n *** .spec.replicas: '3' != '2'\n *** .metadata: 'labels' missing\n"
        );
    }

    #[test]
    fn test_object_without_differences() {
        let mut reporter = TextReporter::new(Vec::new());
        reporter.register(&KubeObject::new("kube-system", "Service", "dns")).unwrap();
        reporter.finalize().unwrap();
        assert_eq!(output(reporter), "Checking Service 'dns'\n");
    }

    #[test]
    fn test_broken_cluster_line() {
        let obj = KubeObject::new("default", "Service", "gone");
        let mut reporter = TextReporter::new(Vec::new());
        reporter.register(&obj).unwrap();
        reporter.record(&obj, &Difference::broken_cluster("NotFound")).unwrap();
        assert_eq!(
            output(reporter),
            "Checking Service 'gone'\n *** Unable to fetch live object: NotFound\n"
        );
    }
}
