quantity!(
    /// Abstract time unit the development budget and project durations are measured in.
    TimeUnits,
    suffix: "t"
);
