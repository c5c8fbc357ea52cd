// SPDX: CC0-1.0

use crate::{
    geometry::{Answer, Operation},
    Number, Point,
};

/// One completed calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationRecord {
    pub points: Vec<Point<Number>>,
    pub operation: Operation,
    pub answer: Answer,
}

impl CalculationRecord {
    /// `(x1, y1) and (x2, y2)` for segments, `(x1, y1) to (x2, y2) to (x3, y3)`
    /// for triangles.
    pub fn points_description(&self) -> String {
        let joiner = if self.points.len() > 2 { " to " } else { " and " };
        self.points
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(joiner)
    }
}

/// Every calculation made this session, oldest first. Append only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionTable {
    records: Vec<CalculationRecord>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, points: Vec<Point<Number>>, operation: Operation, answer: Answer) {
        self.records.push(CalculationRecord {
            points,
            operation,
            answer,
        });
    }

    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, CalculationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a SessionTable {
    type Item = &'a CalculationRecord;
    type IntoIter = core::slice::Iter<'a, CalculationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut table = SessionTable::new();
        assert!(table.is_empty());
        table.record(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            Operation::Distance,
            Answer::Scalar(1.0),
        );
        table.record(
            vec![Point::new(1.0, 1.0), Point::new(1.0, 5.0)],
            Operation::Gradient,
            Answer::Undefined,
        );
        let ops: Vec<Operation> = table.iter().map(|r| r.operation).collect();
        assert_eq!(ops, [Operation::Distance, Operation::Gradient]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn describes_points() {
        let segment = CalculationRecord {
            points: vec![Point::new(3.0, 4.0), Point::new(0.0, 0.0)],
            operation: Operation::Distance,
            answer: Answer::Scalar(5.0),
        };
        assert_eq!(segment.points_description(), "(3.0, 4.0) and (0.0, 0.0)");

        let triangle = CalculationRecord {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(0.0, 3.0),
            ],
            operation: Operation::Area,
            answer: Answer::Scalar(6.0),
        };
        assert_eq!(
            triangle.points_description(),
            "(0.0, 0.0) to (4.0, 0.0) to (0.0, 3.0)"
        );
    }
}
