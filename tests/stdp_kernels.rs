#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::Array1;
    use spiking_neural_network_logs::{
        error::LearningError,
        extract::{NetworkInfoExtractor, NetworkMetadata},
        schema::{LogSchema, MetadataSection},
        stdp::{
            hard_soft_kernel, heaviside, time_axis, zero_offset, AlphaKernel,
            LearningType, LearningWindow, STDPKernel, STDPKernelParams,
        },
    };

    fn metadata(learning_line: &str) -> NetworkMetadata {
        NetworkInfoExtractor::default().extract(&[learning_line])
    }

    #[test]
    pub fn test_heaviside() {
        assert_eq!(heaviside(-1.), 0.);
        assert_eq!(heaviside(-1e-12), 0.);
        assert_eq!(heaviside(0.), 0.5);
        assert_eq!(heaviside(1e-12), 1.);
        assert_eq!(heaviside(1.), 1.);
    }

    #[test]
    pub fn test_learning_type_parsing() {
        assert_eq!("stdp_soft".parse::<LearningType>(), Ok(LearningType::StdpSoft));
        assert_eq!("stdp_hard".parse::<LearningType>(), Ok(LearningType::StdpHard));
        assert_eq!("stdp_alpha".parse::<LearningType>(), Ok(LearningType::StdpAlpha));
        assert_eq!(
            "hebbian".parse::<LearningType>(),
            Err(LearningError::UnknownLearningType(String::from("hebbian")))
        );
        assert_eq!(LearningType::StdpAlpha.to_string(), "stdp_alpha");
    }

    #[test]
    pub fn test_hard_soft_params_strip_period_units() {
        let schema = LogSchema::default();

        for learning_type in ["stdp_hard", "stdp_soft"] {
            let metadata = metadata(&format!(
                "t - learning; learning_type: {}; inhibitory_amplitude: 0.5; inhibitory_period: 12.5 ms; \
                excitation_amplitude: 1.5; excitation_period: 8 ms",
                learning_type,
            ));

            assert_eq!(
                STDPKernelParams::from_metadata(&metadata, &schema),
                Ok(STDPKernelParams::HardOrSoft {
                    inhib_amplitude: 0.5,
                    inhib_period: 12.5,
                    excite_amplitude: 1.5,
                    excite_period: 8.,
                })
            );
        }
    }

    #[test]
    pub fn test_alpha_params() {
        let metadata = metadata(
            "t - learning; learning_type: stdp_alpha; baseline: -0.5; time_constant: 10 ms; learning_rate: 0.01"
        );

        assert_eq!(
            STDPKernelParams::from_metadata(&metadata, &LogSchema::default()),
            Ok(STDPKernelParams::Alpha { baseline: -0.5, time_constant: 10., learning_rate: 0.01 })
        );
    }

    #[test]
    pub fn test_param_failures() {
        let schema = LogSchema::default();

        let unknown = metadata("t - learning; learning_type: bcm; rate: 1");
        assert_eq!(
            STDPKernelParams::from_metadata(&unknown, &schema),
            Err(LearningError::UnknownLearningType(String::from("bcm")))
        );

        let missing = metadata("t - learning; learning_type: stdp_alpha; baseline: -0.5; learning_rate: 0.1");
        assert_eq!(
            STDPKernelParams::from_metadata(&missing, &schema),
            Err(LearningError::MissingField { field: String::from("time_constant") })
        );

        let unparseable = metadata("t - learning; learning_type: stdp_alpha; baseline: low; time_constant: 1; learning_rate: 0.1");
        assert!(matches!(
            STDPKernelParams::from_metadata(&unparseable, &schema),
            Err(LearningError::NumericParseFailure { ref field, .. }) if field == "baseline"
        ));

        assert_eq!(
            STDPKernelParams::from_metadata(&NetworkMetadata::default(), &schema),
            Err(LearningError::MissingSection(MetadataSection::Learning))
        );

        let no_type = metadata("t - learning; baseline: -0.5");
        assert_eq!(
            LearningType::from_metadata(&no_type),
            Err(LearningError::MissingField { field: String::from("learning_type") })
        );
    }

    #[test]
    pub fn test_hard_soft_kernel_shape() {
        let (inhib_amplitude, inhib_period, excite_amplitude, excite_period) = (0.5, 10., 1., 20.);

        assert_relative_eq!(hard_soft_kernel(inhib_amplitude, inhib_period, excite_amplitude, excite_period, 0.), 1.);
        assert_relative_eq!(
            hard_soft_kernel(inhib_amplitude, inhib_period, excite_amplitude, excite_period, 10.),
            -0.5 * (-1_f64).exp()
        );
        assert_relative_eq!(
            hard_soft_kernel(inhib_amplitude, inhib_period, excite_amplitude, excite_period, -20.),
            (-1_f64).exp()
        );

        let kernel = STDPKernel::new(STDPKernelParams::HardOrSoft {
            inhib_amplitude, inhib_period, excite_amplitude, excite_period,
        }).unwrap();
        let window = LearningWindow { time_window: 0., weight: 0., max_weight: 0. };
        let times = time_axis(-50., 50., 0.5).unwrap();
        let curve = kernel.curve(&times, &window);

        assert_eq!(curve.len(), 200);
        for (t, value) in times.iter().zip(curve.iter()) {
            if *t > 0. {
                assert!(*value < 0.);
            } else {
                assert!(*value > 0.);
            }
        }
    }

    #[test]
    pub fn test_zero_offset_is_real_and_increasing() {
        for baseline in [-1e-6, -0.01, -0.1, -0.5, -1., -5., -100., -1e6] {
            let mut previous = 0.;

            for time_constant in [0.1, 1., 5., 10., 100., 1000.] {
                let offset = zero_offset(time_constant, baseline);

                assert!(offset.is_finite());
                assert!(offset > previous);
                previous = offset;
            }
        }
    }

    #[test]
    pub fn test_zero_offset_values() {
        assert_relative_eq!(zero_offset(1., -0.5), 0.13933581990, epsilon = 1e-9);
        assert_relative_eq!(zero_offset(10., -0.5), 1.3933581990, epsilon = 1e-8);
        assert_relative_eq!(zero_offset(1., -1.), 0.22240168446, epsilon = 1e-9);
    }

    #[test]
    pub fn test_alpha_kernel_rejects_unsupported_parameters() {
        assert!(matches!(AlphaKernel::new(0., 10., 0.1), Err(LearningError::UnsupportedAlphaParameters { .. })));
        assert!(matches!(AlphaKernel::new(0.5, 10., 0.1), Err(LearningError::UnsupportedAlphaParameters { .. })));
        assert!(matches!(AlphaKernel::new(-0.5, 0., 0.1), Err(LearningError::UnsupportedAlphaParameters { .. })));
        assert!(matches!(AlphaKernel::new(f64::NAN, 10., 0.1), Err(LearningError::UnsupportedAlphaParameters { .. })));
        assert!(matches!(AlphaKernel::new(-0.5, f64::NAN, 0.1), Err(LearningError::UnsupportedAlphaParameters { .. })));
        assert!(AlphaKernel::new(-0.5, 10., 0.1).is_ok());
    }

    #[test]
    pub fn test_time_axis() {
        assert_eq!(time_axis(0., 2., 0.5).unwrap(), Array1::from(vec![0., 0.5, 1., 1.5]));
        assert_eq!(time_axis(2., 0., -1.).unwrap(), Array1::from(vec![2., 1.]));
        assert!(time_axis(5., 5., 1.).unwrap().is_empty());

        for (start, end, step) in [
            (0., 10., 0.),
            (0., 10., f64::NAN),
            (0., 10., -1.),
            (10., 0., 1.),
            (f64::NEG_INFINITY, 0., 1.),
            (0., f64::INFINITY, 1.),
        ] {
            assert!(matches!(
                time_axis(start, end, step),
                Err(LearningError::InvalidTimeAxis { .. })
            ));
        }
    }

    #[test]
    pub fn test_alpha_kernel_values() {
        let kernel = AlphaKernel::new(-0.5, 10., 2.).unwrap();
        let time_window = 20.;

        assert_relative_eq!(kernel.zero_offset(), zero_offset(10., -0.5));

        // near zero at the end of the window
        assert!(kernel.value(time_window, time_window, 0., 1.).abs() < 0.05);
        // potentiation before the end, floored at the baseline after it
        assert!(kernel.value(time_window - 5., time_window, 0., 1.) > 0.);
        assert_relative_eq!(kernel.value(time_window + 5., time_window, 0., 1.), 2. * -0.5);
        assert_relative_eq!(kernel.value(time_window + 50., time_window, 0., 1.), 2. * -0.5);
    }

    #[test]
    pub fn test_alpha_kernel_weight_gate() {
        let kernel = AlphaKernel::new(-0.5, 10., 1.).unwrap();
        let times = Array1::from(vec![0., 5., 10., 15.]);

        let open = kernel.curve(&times, 20., 0.5, 1.);
        let half = kernel.curve(&times, 20., 1., 1.);
        let closed = kernel.curve(&times, 20., 1.5, 1.);

        assert!(closed.iter().all(|value| *value == 0.));
        for (open_value, half_value) in open.iter().zip(half.iter()) {
            assert_relative_eq!(*half_value, 0.5 * open_value);
        }
    }

    #[test]
    pub fn test_kernel_from_metadata() {
        let schema = LogSchema::default();
        let metadata = metadata(
            "t - learning; learning_type: stdp_alpha; baseline: -0.25; time_constant: 5 ms; learning_rate: 0.1"
        );

        let kernel = STDPKernel::from_metadata(&metadata, &schema).unwrap();
        let window = LearningWindow { time_window: 10., weight: 0., max_weight: 1. };
        let times = time_axis(0., 30., 1.).unwrap();

        let expected = AlphaKernel::new(-0.25, 5., 0.1).unwrap().curve(&times, 10., 0., 1.);

        assert_eq!(kernel.curve(&times, &window), expected);
    }
}
