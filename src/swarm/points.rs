//! Point records of evaluated cells and their ordered comparison key

/// A cell above the candidate whose leading near-line count is below this
/// value has the above cell's near points ranked ahead of its own
pub const NEAR_WIN_THRESHOLD: i32 = 2;

/// Points of one looser threshold, the larger side first
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct NearPair {
    pub leading: i32,
    pub trailing: i32,
}

impl NearPair {
    pub fn ordered(own: i32, opp: i32) -> Self {
        if own > opp {
            Self {
                leading: own,
                trailing: opp,
            }
        } else {
            Self {
                leading: opp,
                trailing: own,
            }
        }
    }
}

/// Unsigned points of a single cell
///
/// `own_immediate`/`opp_immediate` count axes on which a piece at the cell
/// completes `inarow` for the mover/opponent; `near` holds one pair per
/// looser threshold, `inarow - 1` down to 3.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CellPoints {
    pub own_immediate: i32,
    pub opp_immediate: i32,
    pub near: Vec<NearPair>,
}

impl CellPoints {
    /// Placeholder for a cell beyond the top of the grid
    pub fn zeroed(inarow: usize) -> Self {
        Self {
            own_immediate: 0,
            opp_immediate: 0,
            near: vec![NearPair::default(); near_thresholds(inarow)],
        }
    }

    /// The points in evaluation order: own, opponent, then each near pair
    pub fn to_vec(&self) -> Vec<i32> {
        let mut points = vec![self.own_immediate, self.opp_immediate];
        for pair in &self.near {
            points.push(pair.leading);
            points.push(pair.trailing);
        }
        points
    }
}

/// The number of looser thresholds scored below the immediate one
pub fn near_thresholds(inarow: usize) -> usize {
    inarow.saturating_sub(3)
}

/// Levels an odd distance above the candidate count against it
pub fn level_sign(level: usize) -> i32 {
    if level % 2 == 1 {
        -1
    } else {
        1
    }
}

/// Where the near points of the cell directly above go relative to the
/// candidate's own first near pair
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AboveNearPlacement {
    /// above leading, above trailing, near leading, near trailing
    Before,
    /// above leading, near leading, near trailing, above trailing
    Split,
    /// near leading, near trailing, above leading, above trailing
    After,
}

impl AboveNearPlacement {
    pub fn choose(near: NearPair, above: NearPair) -> Self {
        let leading = near.leading.abs();
        if leading >= NEAR_WIN_THRESHOLD || leading >= above.leading {
            AboveNearPlacement::After
        } else if leading < above.trailing {
            AboveNearPlacement::Before
        } else {
            AboveNearPlacement::Split
        }
    }
}

/// Every feature of a candidate cell, kept by name until it is flattened
/// into the comparison key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointVector {
    /// The candidate cell itself
    pub cell: CellPoints,
    /// The cell directly above, absent only on single-row boards
    pub above: Option<CellPoints>,
    /// Cells two or more rows above, nearest first
    pub stack: Vec<CellPoints>,
}

impl PointVector {
    pub fn above_near_placement(&self) -> Option<AboveNearPlacement> {
        let above = self.above.as_ref()?;
        match (self.cell.near.first(), above.near.first()) {
            (Some(&near), Some(&above_near)) => Some(AboveNearPlacement::choose(near, above_near)),
            _ => None,
        }
    }

    /// Flattens the record into the vector compared between candidates
    ///
    /// Layout: own and opponent immediate points, the above cell's
    /// immediate points (opponent first), the first near pair interleaved
    /// with the above cell's first near pair, the remaining near pairs, then
    /// every higher level in full with alternating sign.
    pub fn comparison_key(&self) -> Vec<i32> {
        let mut key = vec![self.cell.own_immediate, self.cell.opp_immediate];

        match &self.above {
            Some(above) => {
                let sign = level_sign(1);
                key.push(sign * above.opp_immediate);
                key.push(sign * above.own_immediate);

                if let Some(&near) = self.cell.near.first() {
                    match (above.near.first(), self.above_near_placement()) {
                        (Some(above_near), Some(placement)) => {
                            let (lead, trail) =
                                (sign * above_near.leading, sign * above_near.trailing);
                            match placement {
                                AboveNearPlacement::Before => {
                                    key.extend([lead, trail, near.leading, near.trailing])
                                }
                                AboveNearPlacement::Split => {
                                    key.extend([lead, near.leading, near.trailing, trail])
                                }
                                AboveNearPlacement::After => {
                                    key.extend([near.leading, near.trailing, lead, trail])
                                }
                            }
                        }
                        _ => key.extend([near.leading, near.trailing]),
                    }
                }
            }
            None => {
                if let Some(&near) = self.cell.near.first() {
                    key.extend([near.leading, near.trailing]);
                }
            }
        }

        for pair in self.cell.near.iter().skip(1) {
            key.push(pair.leading);
            key.push(pair.trailing);
        }

        for (offset, points) in self.stack.iter().enumerate() {
            let sign = level_sign(offset + 2);
            key.extend(points.to_vec().into_iter().map(|point| sign * point));
        }
        key
    }
}
