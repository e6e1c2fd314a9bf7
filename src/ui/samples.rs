/// A ready-made expression the user can drop into the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub name: &'static str,
    pub latex: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "Fraction",
        latex: r"\frac{a}{b}",
    },
    Sample {
        name: "Quadratic formula",
        latex: r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}",
    },
    Sample {
        name: "Integral",
        latex: r"\int_0^1 x^2 \, dx",
    },
    Sample {
        name: "Square root",
        latex: r"\sqrt{x^2 + y^2}",
    },
    Sample {
        name: "Summation",
        latex: r"\sum_{i=1}^{n} i = \frac{n(n+1)}{2}",
    },
    Sample {
        name: "Limit",
        latex: r"\lim_{x \to 0} \frac{\sin x}{x} = 1",
    },
    Sample {
        name: "Matrix",
        latex: r"\begin{pmatrix} a & b \\ c & d \end{pmatrix}",
    },
    Sample {
        name: "Euler's identity",
        latex: r"e^{i\pi} + 1 = 0",
    },
];

pub fn get(index: usize) -> Option<&'static Sample> {
    SAMPLES.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(get(0).map(|s| s.latex), Some(r"\frac{a}{b}"));
        assert_eq!(get(SAMPLES.len()), None);
    }

    #[test]
    fn names_are_unique() {
        let mut names = SAMPLES.iter().map(|s| s.name).collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SAMPLES.len());
    }
}
