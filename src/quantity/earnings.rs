quantity!(Earnings, suffix: "$");
