/// Which half of the there-and-back motion a frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Forward,
    Reverse,
}

/// One frame of the schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// Monotonic index across both passes, used for the output file name
    pub output_index: u32,
    /// Position within the motion, `0..=frames / 2`
    pub sample_index: u32,
    pub pass: Pass,
    pub percentage: f32,
}

/// Forward-then-reverse frame schedule for a frame budget `F`.
///
/// The forward pass samples `0..F/2`, the reverse pass samples `F/2` down to
/// `0` inclusive, so `F/2 + F/2 + 1` frames are produced in total. The
/// schedule is `Copy`; every call to [`FrameSchedule::iter`] starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSchedule {
    frames: u32,
}

impl FrameSchedule {
    pub fn new(frames: u32) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Turning point of the motion, `F / 2`
    pub fn half(&self) -> u32 {
        self.frames / 2
    }

    /// Number of steps both passes emit together
    pub fn len(&self) -> usize {
        self.half() as usize * 2 + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(i / F) * 2`, so the turning point maps to 1.0 for even budgets
    pub fn percentage(&self, sample_index: u32) -> f32 {
        if self.frames == 0 {
            return 0.0;
        }
        (sample_index as f32 / self.frames as f32) * 2.0
    }

    pub fn iter(&self) -> ScheduleIter {
        ScheduleIter {
            schedule: *self,
            position: 0,
        }
    }
}

impl IntoIterator for FrameSchedule {
    type Item = FrameStep;
    type IntoIter = ScheduleIter;

    fn into_iter(self) -> ScheduleIter {
        self.iter()
    }
}

impl IntoIterator for &FrameSchedule {
    type Item = FrameStep;
    type IntoIter = ScheduleIter;

    fn into_iter(self) -> ScheduleIter {
        self.iter()
    }
}

/// Lazy iterator over a [`FrameSchedule`]
#[derive(Debug, Clone)]
pub struct ScheduleIter {
    schedule: FrameSchedule,
    position: u32,
}

impl Iterator for ScheduleIter {
    type Item = FrameStep;

    fn next(&mut self) -> Option<FrameStep> {
        if self.position as usize >= self.schedule.len() {
            return None;
        }

        let half = self.schedule.half();
        let output_index = self.position;
        let (pass, sample_index) = if output_index < half {
            (Pass::Forward, output_index)
        } else {
            (Pass::Reverse, half - (output_index - half))
        };
        self.position += 1;

        Some(FrameStep {
            output_index,
            sample_index,
            pass,
            percentage: self.schedule.percentage(sample_index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.schedule.len() - self.position as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScheduleIter {}
