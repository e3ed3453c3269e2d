//! Reference quadrature rules for intervals and triangles
//!
//! Static tables of Gauss-Legendre abscissae/weights on the [-1, 1] interval
//! and symmetric quadrature rules on the unit triangle (0,0), (1,0), (0,1),
//! both for degrees 1 through 12. The values are published constants and are
//! reproduced verbatim; re-deriving them risks precision drift.
//!
//! Triangle source:
//! <http://math2.uncc.edu/~shaodeng/TEACHING/math5172/MatlabCodes/TriGaussQuad/TriGaussPoints.m>

use crate::{QuadratureError, Result};

/// Gauss-Legendre rule on the reference interval [-1, 1].
///
/// Returns (abscissa, weight) pairs; the weights of every rule sum to 2, the
/// length of the reference interval. A degree-d rule integrates polynomials
/// up to degree 2d - 1 exactly.
pub fn interval_rule(degree: usize) -> Result<&'static [(f64, f64)]> {
    match degree {
        1 => Ok(&[(0.00000000000000000, 2.00000000000000000)]),
        2 => Ok(&[
            (-0.57735026918962570, 1.00000000000000000),
            (0.57735026918962570, 1.00000000000000000),
        ]),
        3 => Ok(&[
            (-0.77459666924148340, 0.55555555555555570),
            (0.00000000000000000, 0.88888888888888880),
            (0.77459666924148340, 0.55555555555555570),
        ]),
        4 => Ok(&[
            (-0.86113631159405260, 0.34785484513745370),
            (-0.33998104358485626, 0.65214515486254620),
            (0.33998104358485626, 0.65214515486254620),
            (0.86113631159405260, 0.34785484513745370),
        ]),
        5 => Ok(&[
            (-0.90617984593866400, 0.23692688505618942),
            (-0.53846931010568310, 0.47862867049936620),
            (0.00000000000000000, 0.56888888888888900),
            (0.53846931010568310, 0.47862867049936620),
            (0.90617984593866400, 0.23692688505618942),
        ]),
        6 => Ok(&[
            (-0.93246951420315200, 0.17132449237916975),
            (-0.66120938646626450, 0.36076157304813894),
            (-0.23861918608319693, 0.46791393457269137),
            (0.23861918608319693, 0.46791393457269137),
            (0.66120938646626450, 0.36076157304813894),
            (0.93246951420315200, 0.17132449237916975),
        ]),
        7 => Ok(&[
            (-0.94910791234275850, 0.12948496616887065),
            (-0.74153118559939450, 0.27970539148927660),
            (-0.40584515137739720, 0.38183005050511830),
            (0.00000000000000000, 0.41795918367346896),
            (0.40584515137739720, 0.38183005050511830),
            (0.74153118559939450, 0.27970539148927660),
            (0.94910791234275850, 0.12948496616887065),
        ]),
        8 => Ok(&[
            (-0.96028985649753620, 0.10122853629037669),
            (-0.79666647741362670, 0.22238103445337434),
            (-0.52553240991632900, 0.31370664587788705),
            (-0.18343464249564978, 0.36268378337836177),
            (0.18343464249564978, 0.36268378337836177),
            (0.52553240991632900, 0.31370664587788705),
            (0.79666647741362670, 0.22238103445337434),
            (0.96028985649753620, 0.10122853629037669),
        ]),
        9 => Ok(&[
            (-0.96816023950762610, 0.08127438836157472),
            (-0.83603110732663580, 0.18064816069485712),
            (-0.61337143270059040, 0.26061069640293566),
            (-0.32425342340380890, 0.31234707704000280),
            (0.00000000000000000, 0.33023935500125967),
            (0.32425342340380890, 0.31234707704000280),
            (0.61337143270059040, 0.26061069640293566),
            (0.83603110732663580, 0.18064816069485712),
            (0.96816023950762610, 0.08127438836157472),
        ]),
        10 => Ok(&[
            (-0.97390652851717170, 0.06667134430868807),
            (-0.86506336668898450, 0.14945134915058036),
            (-0.67940956829902440, 0.21908636251598200),
            (-0.43339539412924720, 0.26926671930999650),
            (-0.14887433898163122, 0.29552422471475300),
            (0.14887433898163122, 0.29552422471475300),
            (0.43339539412924720, 0.26926671930999650),
            (0.67940956829902440, 0.21908636251598200),
            (0.86506336668898450, 0.14945134915058036),
            (0.97390652851717170, 0.06667134430868807),
        ]),
        11 => Ok(&[
            (-0.97822865814605700, 0.055668567116173164),
            (-0.88706259976809530, 0.125580369464904700),
            (-0.73015200557404940, 0.186290210927734430),
            (-0.51909612920681180, 0.233193764591990680),
            (-0.26954315595234496, 0.262804544510246760),
            (0.00000000000000000, 0.272925086777900900),
            (0.26954315595234496, 0.262804544510246760),
            (0.51909612920681180, 0.233193764591990680),
            (0.73015200557404940, 0.186290210927734430),
            (0.88706259976809530, 0.125580369464904700),
            (0.97822865814605700, 0.055668567116173164),
        ]),
        12 => Ok(&[
            (-0.98156063424671920, 0.04717533638651202),
            (-0.90411725637047480, 0.10693932599531888),
            (-0.76990267419430470, 0.16007832854334610),
            (-0.58731795428661750, 0.20316742672306565),
            (-0.36783149899818020, 0.23349253653835464),
            (-0.12523340851146890, 0.24914704581340270),
            (0.12523340851146890, 0.24914704581340270),
            (0.36783149899818020, 0.23349253653835464),
            (0.58731795428661750, 0.20316742672306565),
            (0.76990267419430470, 0.16007832854334610),
            (0.90411725637047480, 0.10693932599531888),
            (0.98156063424671920, 0.04717533638651202),
        ]),
        other => Err(QuadratureError::UnsupportedDegree(other)),
    }
}

/// Symmetric quadrature rule on the unit triangle.
///
/// Returns (u, v, weight) triples in reference coordinates; the weights of
/// every rule sum to 1. The degree 3 and 7 rules contain a negative weight,
/// and the degree 11 rule contains points outside the unit range. Both are
/// correct published values for these symmetric rules, not defects.
pub fn triangle_rule(degree: usize) -> Result<&'static [(f64, f64, f64)]> {
    match degree {
        1 => Ok(&[(0.33333333333333, 0.33333333333333, 1.00000000000000)]),
        2 => Ok(&[
            (0.16666666666667, 0.16666666666667, 0.33333333333333),
            (0.16666666666667, 0.66666666666667, 0.33333333333333),
            (0.66666666666667, 0.16666666666667, 0.33333333333333),
        ]),
        3 => Ok(&[
            (0.33333333333333, 0.33333333333333, -0.56250000000000),
            (0.20000000000000, 0.20000000000000, 0.52083333333333),
            (0.20000000000000, 0.60000000000000, 0.52083333333333),
            (0.60000000000000, 0.20000000000000, 0.52083333333333),
        ]),
        4 => Ok(&[
            (0.44594849091597, 0.44594849091597, 0.22338158967801),
            (0.44594849091597, 0.10810301816807, 0.22338158967801),
            (0.10810301816807, 0.44594849091597, 0.22338158967801),
            (0.09157621350977, 0.09157621350977, 0.10995174365532),
            (0.09157621350977, 0.81684757298046, 0.10995174365532),
            (0.81684757298046, 0.09157621350977, 0.10995174365532),
        ]),
        5 => Ok(&[
            (0.33333333333333, 0.33333333333333, 0.22500000000000),
            (0.47014206410511, 0.47014206410511, 0.13239415278851),
            (0.47014206410511, 0.05971587178977, 0.13239415278851),
            (0.05971587178977, 0.47014206410511, 0.13239415278851),
            (0.10128650732346, 0.10128650732346, 0.12593918054483),
            (0.10128650732346, 0.79742698535309, 0.12593918054483),
            (0.79742698535309, 0.10128650732346, 0.12593918054483),
        ]),
        6 => Ok(&[
            (0.24928674517091, 0.24928674517091, 0.11678627572638),
            (0.24928674517091, 0.50142650965818, 0.11678627572638),
            (0.50142650965818, 0.24928674517091, 0.11678627572638),
            (0.06308901449150, 0.06308901449150, 0.05084490637021),
            (0.06308901449150, 0.87382197101700, 0.05084490637021),
            (0.87382197101700, 0.06308901449150, 0.05084490637021),
            (0.31035245103378, 0.63650249912140, 0.08285107561837),
            (0.63650249912140, 0.05314504984482, 0.08285107561837),
            (0.05314504984482, 0.31035245103378, 0.08285107561837),
            (0.63650249912140, 0.31035245103378, 0.08285107561837),
            (0.31035245103378, 0.05314504984482, 0.08285107561837),
            (0.05314504984482, 0.63650249912140, 0.08285107561837),
        ]),
        7 => Ok(&[
            (0.33333333333333, 0.33333333333333, -0.14957004446768),
            (0.26034596607904, 0.26034596607904, 0.17561525743321),
            (0.26034596607904, 0.47930806784192, 0.17561525743321),
            (0.47930806784192, 0.26034596607904, 0.17561525743321),
            (0.06513010290222, 0.06513010290222, 0.05334723560884),
            (0.06513010290222, 0.86973979419557, 0.05334723560884),
            (0.86973979419557, 0.06513010290222, 0.05334723560884),
            (0.31286549600487, 0.63844418856981, 0.07711376089026),
            (0.63844418856981, 0.04869031542532, 0.07711376089026),
            (0.04869031542532, 0.31286549600487, 0.07711376089026),
            (0.63844418856981, 0.31286549600487, 0.07711376089026),
            (0.31286549600487, 0.04869031542532, 0.07711376089026),
            (0.04869031542532, 0.63844418856981, 0.07711376089026),
        ]),
        8 => Ok(&[
            (0.33333333333333, 0.33333333333333, 0.14431560767779),
            (0.45929258829272, 0.45929258829272, 0.09509163426728),
            (0.45929258829272, 0.08141482341455, 0.09509163426728),
            (0.08141482341455, 0.45929258829272, 0.09509163426728),
            (0.17056930775176, 0.17056930775176, 0.10321737053472),
            (0.17056930775176, 0.65886138449648, 0.10321737053472),
            (0.65886138449648, 0.17056930775176, 0.10321737053472),
            (0.05054722831703, 0.05054722831703, 0.03245849762320),
            (0.05054722831703, 0.89890554336594, 0.03245849762320),
            (0.89890554336594, 0.05054722831703, 0.03245849762320),
            (0.26311282963464, 0.72849239295540, 0.02723031417443),
            (0.72849239295540, 0.00839477740996, 0.02723031417443),
            (0.00839477740996, 0.26311282963464, 0.02723031417443),
            (0.72849239295540, 0.26311282963464, 0.02723031417443),
            (0.26311282963464, 0.00839477740996, 0.02723031417443),
            (0.00839477740996, 0.72849239295540, 0.02723031417443),
        ]),
        9 => Ok(&[
            (0.33333333333333, 0.33333333333333, 0.09713579628280),
            (0.48968251919874, 0.48968251919874, 0.03133470022714),
            (0.48968251919874, 0.02063496160252, 0.03133470022714),
            (0.02063496160252, 0.48968251919874, 0.03133470022714),
            (0.43708959149294, 0.43708959149294, 0.07782754100477),
            (0.43708959149294, 0.12582081701413, 0.07782754100477),
            (0.12582081701413, 0.43708959149294, 0.07782754100477),
            (0.18820353561903, 0.18820353561903, 0.07964773892721),
            (0.18820353561903, 0.62359292876193, 0.07964773892721),
            (0.62359292876193, 0.18820353561903, 0.07964773892721),
            (0.04472951339445, 0.04472951339445, 0.02557767565870),
            (0.04472951339445, 0.91054097321109, 0.02557767565870),
            (0.91054097321109, 0.04472951339445, 0.02557767565870),
            (0.22196298916077, 0.74119859878450, 0.04328353937729),
            (0.74119859878450, 0.03683841205474, 0.04328353937729),
            (0.03683841205474, 0.22196298916077, 0.04328353937729),
            (0.74119859878450, 0.22196298916077, 0.04328353937729),
            (0.22196298916077, 0.03683841205474, 0.04328353937729),
            (0.03683841205474, 0.74119859878450, 0.04328353937729),
        ]),
        10 => Ok(&[
            (0.33333333333333, 0.33333333333333, 0.09081799038275),
            (0.48557763338366, 0.48557763338366, 0.03672595775647),
            (0.48557763338366, 0.02884473323269, 0.03672595775647),
            (0.02884473323269, 0.48557763338366, 0.03672595775647),
            (0.10948157548504, 0.10948157548504, 0.04532105943553),
            (0.10948157548504, 0.78103684902993, 0.04532105943553),
            (0.78103684902993, 0.10948157548504, 0.04532105943553),
            (0.30793983876412, 0.55035294182100, 0.07275791684542),
            (0.55035294182100, 0.14170721941488, 0.07275791684542),
            (0.14170721941488, 0.30793983876412, 0.07275791684542),
            (0.55035294182100, 0.30793983876412, 0.07275791684542),
            (0.30793983876412, 0.14170721941488, 0.07275791684542),
            (0.14170721941488, 0.55035294182100, 0.07275791684542),
            (0.24667256063990, 0.72832390459741, 0.02832724253106),
            (0.72832390459741, 0.02500353476269, 0.02832724253106),
            (0.02500353476269, 0.24667256063990, 0.02832724253106),
            (0.72832390459741, 0.24667256063990, 0.02832724253106),
            (0.24667256063990, 0.02500353476269, 0.02832724253106),
            (0.02500353476269, 0.72832390459741, 0.02832724253106),
            (0.06680325101220, 0.92365593358750, 0.00942166696373),
            (0.92365593358750, 0.00954081540030, 0.00942166696373),
            (0.00954081540030, 0.06680325101220, 0.00942166696373),
            (0.92365593358750, 0.06680325101220, 0.00942166696373),
            (0.06680325101220, 0.00954081540030, 0.00942166696373),
            (0.00954081540030, 0.92365593358750, 0.00942166696373),
        ]),
        11 => Ok(&[
            (0.53461104827076, 0.53461104827076, 0.00092700632896),
            (0.53461104827076, -0.06922209654152, 0.00092700632896),
            (-0.06922209654152, 0.53461104827076, 0.00092700632896),
            (0.39896930296585, 0.39896930296585, 0.07714953491481),
            (0.39896930296585, 0.20206139406829, 0.07714953491481),
            (0.20206139406829, 0.39896930296585, 0.07714953491481),
            (0.20330990043128, 0.20330990043128, 0.05932297738077),
            (0.20330990043128, 0.59338019913744, 0.05932297738077),
            (0.59338019913744, 0.20330990043128, 0.05932297738077),
            (0.11935091228258, 0.11935091228258, 0.03618454050342),
            (0.11935091228258, 0.76129817543484, 0.03618454050342),
            (0.76129817543484, 0.11935091228258, 0.03618454050342),
            (0.03236494811128, 0.03236494811128, 0.01365973100268),
            (0.03236494811128, 0.93527010377745, 0.01365973100268),
            (0.93527010377745, 0.03236494811128, 0.01365973100268),
            (0.35662064826129, 0.59320121342821, 0.05233711196220),
            (0.59320121342821, 0.05017813831050, 0.05233711196220),
            (0.05017813831050, 0.35662064826129, 0.05233711196220),
            (0.59320121342821, 0.35662064826129, 0.05233711196220),
            (0.35662064826129, 0.05017813831050, 0.05233711196220),
            (0.05017813831050, 0.59320121342821, 0.05233711196220),
            (0.17148898030404, 0.80748900315979, 0.02070765963914),
            (0.80748900315979, 0.02102201653617, 0.02070765963914),
            (0.02102201653617, 0.17148898030404, 0.02070765963914),
            (0.80748900315979, 0.17148898030404, 0.02070765963914),
            (0.17148898030404, 0.02102201653617, 0.02070765963914),
            (0.02102201653617, 0.80748900315979, 0.02070765963914),
        ]),
        12 => Ok(&[
            (0.48821738977381, 0.48821738977381, 0.02573106644045),
            (0.48821738977381, 0.02356522045239, 0.02573106644045),
            (0.02356522045239, 0.48821738977381, 0.02573106644045),
            (0.43972439229446, 0.43972439229446, 0.04369254453804),
            (0.43972439229446, 0.12055121541108, 0.04369254453804),
            (0.12055121541108, 0.43972439229446, 0.04369254453804),
            (0.27121038501212, 0.27121038501212, 0.06285822421789),
            (0.27121038501212, 0.45757922997577, 0.06285822421789),
            (0.45757922997577, 0.27121038501212, 0.06285822421789),
            (0.12757614554159, 0.12757614554159, 0.03479611293071),
            (0.12757614554159, 0.74484770891683, 0.03479611293071),
            (0.74484770891683, 0.12757614554159, 0.03479611293071),
            (0.02131735045321, 0.02131735045321, 0.00616626105156),
            (0.02131735045321, 0.95736529909358, 0.00616626105156),
            (0.95736529909358, 0.02131735045321, 0.00616626105156),
            (0.27571326968551, 0.60894323577979, 0.04037155776638),
            (0.60894323577979, 0.11534349453470, 0.04037155776638),
            (0.11534349453470, 0.27571326968551, 0.04037155776638),
            (0.60894323577979, 0.27571326968551, 0.04037155776638),
            (0.27571326968551, 0.11534349453470, 0.04037155776638),
            (0.11534349453470, 0.60894323577979, 0.04037155776638),
            (0.28132558098994, 0.69583608678780, 0.02235677320230),
            (0.69583608678780, 0.02283833222226, 0.02235677320230),
            (0.02283833222226, 0.28132558098994, 0.02235677320230),
            (0.69583608678780, 0.28132558098994, 0.02235677320230),
            (0.28132558098994, 0.02283833222226, 0.02235677320230),
            (0.02283833222226, 0.69583608678780, 0.02235677320230),
            (0.11625191590760, 0.85801403354407, 0.01731623110866),
            (0.85801403354407, 0.02573405054833, 0.01731623110866),
            (0.02573405054833, 0.11625191590760, 0.01731623110866),
            (0.85801403354407, 0.11625191590760, 0.01731623110866),
            (0.11625191590760, 0.02573405054833, 0.01731623110866),
            (0.02573405054833, 0.85801403354407, 0.01731623110866),
        ]),
        other => Err(QuadratureError::UnsupportedDegree(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interval_weights_sum_to_interval_length() {
        for degree in 1..=12 {
            let rule = interval_rule(degree).unwrap();
            let sum: f64 = rule.iter().map(|&(_, w)| w).sum();
            assert_relative_eq!(sum, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_interval_points_symmetric_about_zero() {
        for degree in 1..=12 {
            let rule = interval_rule(degree).unwrap();
            for (&(x, w), &(x_mirror, w_mirror)) in rule.iter().zip(rule.iter().rev()) {
                assert_relative_eq!(x, -x_mirror, epsilon = 1e-14);
                assert_relative_eq!(w, w_mirror, epsilon = 1e-14);
            }
        }
    }

    #[test]
    fn test_interval_point_count_matches_degree() {
        for degree in 1..=12 {
            assert_eq!(interval_rule(degree).unwrap().len(), degree);
        }
    }

    #[test]
    fn test_triangle_weights_sum_to_unit_triangle_area() {
        // The tables carry the reference triangle's area in the 0.5 factor
        // applied by the mapper, so the raw weights sum to 1.
        for degree in 1..=12 {
            let rule = triangle_rule(degree).unwrap();
            let sum: f64 = rule.iter().map(|&(_, _, w)| w).sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_triangle_negative_weights_preserved() {
        // Degrees 3 and 7 legitimately contain one negative weight each;
        // degree 11's anomaly is its out-of-range coordinates, not a
        // negative weight.
        for degree in [3, 7] {
            let rule = triangle_rule(degree).unwrap();
            assert!(rule.iter().any(|&(_, _, w)| w < 0.0), "degree {}", degree);
        }
        for degree in [1, 2, 4, 5, 6, 8, 9, 10, 11, 12] {
            let rule = triangle_rule(degree).unwrap();
            assert!(rule.iter().all(|&(_, _, w)| w > 0.0), "degree {}", degree);
        }
    }

    #[test]
    fn test_triangle_degree_11_has_points_outside_unit_range() {
        let rule = triangle_rule(11).unwrap();
        assert!(rule.iter().any(|&(u, v, _)| u < 0.0 || v < 0.0));
    }

    #[test]
    fn test_unsupported_degrees_rejected() {
        assert!(matches!(
            interval_rule(0),
            Err(QuadratureError::UnsupportedDegree(0))
        ));
        assert!(matches!(
            interval_rule(13),
            Err(QuadratureError::UnsupportedDegree(13))
        ));
        assert!(matches!(
            triangle_rule(0),
            Err(QuadratureError::UnsupportedDegree(0))
        ));
        assert!(matches!(
            triangle_rule(13),
            Err(QuadratureError::UnsupportedDegree(13))
        ));
    }

    #[test]
    fn test_interval_rule_integrates_cubic_exactly() {
        // The 2-point rule is exact up to degree 3.
        let rule = interval_rule(2).unwrap();

        // x^2 over [-1, 1] = 2/3
        let integral: f64 = rule.iter().map(|&(x, w)| x.powi(2) * w).sum();
        assert_relative_eq!(integral, 2.0 / 3.0, epsilon = 1e-14);

        // x^3 over [-1, 1] = 0
        let integral: f64 = rule.iter().map(|&(x, w)| x.powi(3) * w).sum();
        assert_relative_eq!(integral, 0.0, epsilon = 1e-14);
    }
}
